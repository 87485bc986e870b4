//! HTML rendering of the seat page: one line per row, the booking input,
//! the inline error region and the "Seats Booked:" summary.

use std::fmt::Write;

use crate::services::seat_map::SeatMap;

const STYLE: &str = "\
body { font-family: sans-serif; margin: 2rem; }
.seats-container { display: flex; flex-direction: column; gap: 6px; margin-bottom: 1.5rem; }
.row { display: flex; gap: 6px; }
.seat { width: 36px; height: 36px; line-height: 36px; text-align: center; border-radius: 4px; }
.seat.available { background: #4caf50; color: #fff; }
.seat.booked { background: #f44336; color: #fff; }
.error { color: #f44336; }
";

/// Full page for the current state. `error` is shown above the last booking, if any.
pub fn seat_page(map: &SeatMap, error: Option<&str>) -> String {
    let mut html = String::with_capacity(8 * 1024);
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Train Seat Reservation</title>\n<style>\n");
    html.push_str(STYLE);
    html.push_str("</style>\n</head>\n<body>\n<div class=\"app\">\n");
    html.push_str("<h1>Train Seat Reservation</h1>\n");

    html.push_str(&seat_grid(map));

    let max = map.layout().max_seats_per_request;
    let _ = write!(
        html,
        "<div class=\"controls\">\n<form method=\"post\" action=\"/\">\n<label>\n\
         Enter number of seats to book:\n\
         <input type=\"number\" name=\"count\" min=\"1\" max=\"{max}\" onchange=\"this.form.submit()\">\n\
         </label>\n</form>\n</div>\n"
    );

    if let Some(message) = error {
        let _ = writeln!(html, "<p class=\"error\">{}</p>", html_escape(message));
    }

    if let Some(booking) = map.last_booking() {
        let _ = write!(
            html,
            "<div class=\"booking-info\">\n<h3>Seats Booked:</h3>\n<p>{}</p>\n</div>\n",
            booking.seat_list()
        );
    }

    html.push_str("</div>\n</body>\n</html>\n");
    html
}

/// The seat grid alone.
pub fn seat_grid(map: &SeatMap) -> String {
    let mut html = String::from("<div class=\"seats-container\">\n");
    for row in map.rows() {
        let _ = write!(html, "<div class=\"row\" data-row=\"{}\">", row.row);
        for seat in row.seats {
            let _ = write!(
                html,
                "<div class=\"seat {}\">{}</div>",
                seat.status().css_class(),
                seat.id
            );
        }
        html.push_str("</div>\n");
    }
    html.push_str("</div>\n");
    html
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;

    #[test]
    fn grid_has_one_line_per_row() {
        let map = SeatMap::new(&LayoutConfig::default()).unwrap();
        let grid = seat_grid(&map);
        assert_eq!(grid.matches("<div class=\"row\"").count(), 12);
        assert_eq!(grid.matches("seat available").count(), 80);
        assert!(grid.contains("<div class=\"row\" data-row=\"12\"><div class=\"seat available\">78</div>"));
    }

    #[test]
    fn booked_seats_are_marked() {
        let mut map = SeatMap::new(&LayoutConfig::default()).unwrap();
        map.book(3).unwrap();
        let page = seat_page(&map, None);
        assert!(page.contains("<div class=\"seat booked\">1</div>"));
        assert!(page.contains("<div class=\"seat booked\">3</div>"));
        assert!(page.contains("<div class=\"seat available\">4</div>"));
        assert!(page.contains("<h3>Seats Booked:</h3>\n<p>1, 2, 3</p>"));
        assert!(!page.contains("class=\"error\""));
    }

    #[test]
    fn fresh_page_has_no_summary() {
        let map = SeatMap::new(&LayoutConfig::default()).unwrap();
        let page = seat_page(&map, None);
        assert!(page.contains("<h1>Train Seat Reservation</h1>"));
        assert!(page.contains("max=\"7\""));
        assert!(!page.contains("Seats Booked:"));
    }

    #[test]
    fn error_is_rendered_inline_and_escaped() {
        let map = SeatMap::new(&LayoutConfig::default()).unwrap();
        let page = seat_page(&map, Some("Not enough <seats>"));
        assert!(page.contains("<p class=\"error\">Not enough &lt;seats&gt;</p>"));
    }

    #[test]
    fn escape_handles_ampersand_first() {
        assert_eq!(html_escape("a & <b> \"c\""), "a &amp; &lt;b&gt; &quot;c&quot;");
        assert_eq!(html_escape("&lt;"), "&amp;lt;");
    }
}
