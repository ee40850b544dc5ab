//! Terminal rendering of the availability status.
//!
//! This is the consumption side of the monitor's contract: the initial
//! state renders as loading, afterwards one Connected/Disconnected line per
//! service.

use axon_core::types::AvailabilityStatus;

/// Render a status snapshot as display lines.
pub fn render_status(status: &AvailabilityStatus) -> String {
    if status.loading {
        return "Checking services...".to_string();
    }

    format!(
        "AI API      {}\nDatabase    {}",
        connection_label(status.ai_reachable),
        connection_label(status.database_reachable)
    )
}

fn connection_label(reachable: bool) -> &'static str {
    if reachable {
        "Connected"
    } else {
        "Disconnected"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_renders_checking_line() {
        assert_eq!(
            render_status(&AvailabilityStatus::loading()),
            "Checking services..."
        );
    }

    #[test]
    fn test_connected_lines() {
        let status = AvailabilityStatus {
            ai_reachable: true,
            database_reachable: true,
            loading: false,
        };
        let rendered = render_status(&status);
        assert!(rendered.contains("AI API      Connected"));
        assert!(rendered.contains("Database    Connected"));
    }

    #[test]
    fn test_disconnected_ai_keeps_database_line() {
        let status = AvailabilityStatus {
            ai_reachable: false,
            database_reachable: true,
            loading: false,
        };
        let rendered = render_status(&status);
        assert!(rendered.contains("AI API      Disconnected"));
        assert!(rendered.contains("Database    Connected"));
    }
}
