use chrono::Datelike;

/// Four-digit calendar year in the local time zone.
///
/// On wasm32 this reads the browser clock through JS `Date`.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
