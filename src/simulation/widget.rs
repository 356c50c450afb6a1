//! Message log panel.

use chrono::{DateTime, Local};
use egui::{Color32, RichText, Ui};
use std::time::Duration;

use super::types::SimulatedMessage;
use crate::motion::{self, Pose, ENTER_SECS, SLIDE_DISTANCE};
use crate::theme;

/// A row that has left the log and is still animating out
#[derive(Debug, Clone)]
pub struct LeavingRow {
    pub message: SimulatedMessage,
    /// Simulation time the message was removed
    pub removed_at: Duration,
}

impl LeavingRow {
    /// Done animating at `now`
    pub fn is_gone(&self, now: Duration) -> bool {
        now.saturating_sub(self.removed_at).as_secs_f32() >= ENTER_SECS
    }
}

/// Live row `age` after creation: fades in from the left
pub fn entering_row(age: Duration) -> Pose {
    Pose::entering(motion::progress(age.as_secs_f32(), 0.0, ENTER_SECS), -1.0)
}

/// Removed row `since` its removal: fades out to the right
pub fn leaving_row(since: Duration) -> Pose {
    Pose::leaving(motion::progress(since.as_secs_f32(), 0.0, ENTER_SECS), 1.0)
}

/// Wall-clock time for a message, given when the clock started.
pub fn wall_time(epoch: DateTime<Local>, message: &SimulatedMessage) -> DateTime<Local> {
    chrono::Duration::from_std(message.created_at)
        .ok()
        .and_then(|offset| epoch.checked_add_signed(offset))
        .unwrap_or(epoch)
}

/// Render the log: rows still leaving on top, then live messages in arrival order.
pub fn render_message_log<'a>(
    ui: &mut Ui,
    leaving: &[LeavingRow],
    live: impl Iterator<Item = &'a SimulatedMessage>,
    epoch: DateTime<Local>,
    now: Duration,
) {
    ui.heading("Message Log");
    ui.add_space(6.0);

    let mut any = false;
    for row in leaving {
        any = true;
        let pose = leaving_row(now.saturating_sub(row.removed_at));
        render_row(ui, &row.message, pose, epoch);
    }
    for message in live {
        any = true;
        let pose = entering_row(now.saturating_sub(message.created_at));
        render_row(ui, message, pose, epoch);
    }

    if !any {
        ui.label(
            RichText::new("No messages yet")
                .color(theme::text::MUTED)
                .italics(),
        );
    }
}

fn render_row(ui: &mut Ui, message: &SimulatedMessage, pose: Pose, epoch: DateTime<Local>) {
    let fade = |c: Color32| c.gamma_multiply(pose.opacity);

    ui.horizontal(|ui| {
        // Rows slide inside a fixed gutter
        ui.add_space(SLIDE_DISTANCE + pose.offset);
        ui.label(RichText::new(&message.from).strong().color(fade(theme::text::PRIMARY)));
        ui.label(RichText::new("→").color(fade(theme::accent::CYAN)));
        ui.label(RichText::new(&message.to).strong().color(fade(theme::text::PRIMARY)));
        ui.label(RichText::new(&message.content).color(fade(theme::text::SECONDARY)));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let stamp = wall_time(epoch, message).format("%H:%M:%S").to_string();
            ui.label(RichText::new(stamp).small().color(fade(theme::text::MUTED)));
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::types::MessageId;
    use chrono::TimeZone;

    fn message(created_at: Duration) -> SimulatedMessage {
        SimulatedMessage {
            id: MessageId(created_at.as_millis() as u64),
            from: "gateway".into(),
            to: "channel1".into(),
            content: "Data transfer from Gateway".into(),
            created_at,
        }
    }

    #[test]
    fn rows_slide_in_from_the_left() {
        let start = entering_row(Duration::ZERO);
        assert_eq!(start.opacity, 0.0);
        assert_eq!(start.offset, -SLIDE_DISTANCE);

        let half = entering_row(Duration::from_millis(150));
        assert!((half.opacity - 0.5).abs() < 1e-4);
        assert!((half.offset + 10.0).abs() < 1e-4);

        assert_eq!(entering_row(Duration::from_secs(2)), Pose::REST);
    }

    #[test]
    fn removed_rows_slide_out_to_the_right() {
        assert_eq!(leaving_row(Duration::ZERO), Pose::REST);
        let done = leaving_row(Duration::from_millis(300));
        assert_eq!(done.opacity, 0.0);
        assert_eq!(done.offset, SLIDE_DISTANCE);

        let row = LeavingRow {
            message: message(Duration::from_secs(1)),
            removed_at: Duration::from_secs(4),
        };
        assert!(!row.is_gone(Duration::from_millis(4_200)));
        assert!(row.is_gone(Duration::from_millis(4_300)));
    }

    #[test]
    fn wall_time_offsets_from_epoch() {
        let epoch = Local.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let message = message(Duration::from_secs(61));
        assert_eq!(wall_time(epoch, &message).format("%H:%M:%S").to_string(), "03:05:06");
    }
}
