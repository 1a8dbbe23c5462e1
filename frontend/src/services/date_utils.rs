use js_sys::Date;
use shared::format_datetime_es;

/// Current wall-clock time formatted for the header clock, e.g.
/// "lunes, 9 de febrero de 2026, 14:35:23".
pub fn current_datetime_text() -> String {
    let now = Date::new_0();
    format_datetime_es(
        now.get_day(),
        now.get_date(),
        now.get_month() + 1, // JavaScript months are 0-indexed
        now.get_full_year(),
        now.get_hours(),
        now.get_minutes(),
        now.get_seconds(),
    )
}
