//! Auxiliary date commands.
//!
//! Weekday lookup, relative descriptions and month calendars for concrete
//! dates. These sit next to the resolver and share its calendar helpers.

pub mod calendar;
mod relative;
mod weekday;

pub use calendar::{render_month, show_calendar, FirstWeekday, MonthCalendar};
pub use relative::{describe, humanize_offset, relative_description, RelativeInfo};
pub use weekday::{get_weekday, WeekdayInfo};
