use chrono::{Datelike, NaiveDate};
use log::warn;
use yew::prelude::*;

use crate::content::{CALENDAR_MONTH, CALENDAR_YEAR, HIGHLIGHTED_DAY, SELECTED_DAY};

const WEEKDAYS: [&str; 7] = ["M", "T", "W", "T", "F", "S", "S"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DayMark {
    Plain,
    Highlighted,
    Selected,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalendarCell {
    Blank,
    Day { day: u32, mark: DayMark },
}

/// Monday-first grid for a month: leading blanks, then one cell per day.
pub fn month_grid(year: i32, month: u32, selected: u32, highlighted: u32) -> Option<Vec<CalendarCell>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    let days = next_first.signed_duration_since(first).num_days() as u32;
    let leading = first.weekday().num_days_from_monday() as usize;

    let mut cells = vec![CalendarCell::Blank; leading];
    cells.extend((1..=days).map(|day| {
        let mark = if day == selected {
            DayMark::Selected
        } else if day == highlighted {
            DayMark::Highlighted
        } else {
            DayMark::Plain
        };
        CalendarCell::Day { day, mark }
    }));
    Some(cells)
}

fn month_title(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_default()
}

/// Static availability mockup. Nothing here reacts to input.
#[function_component(Calendar)]
pub fn calendar() -> Html {
    let cells = month_grid(CALENDAR_YEAR, CALENDAR_MONTH, SELECTED_DAY, HIGHLIGHTED_DAY)
        .unwrap_or_else(|| {
            warn!("Invalid calendar month {}-{}", CALENDAR_YEAR, CALENDAR_MONTH);
            Vec::new()
        });

    html! {
        <div class="calendar-card">
            <div class="calendar-header">
                <button type="button" class="calendar-arrow" aria-hidden="true">{"←"}</button>
                <p class="calendar-title">{month_title(CALENDAR_YEAR, CALENDAR_MONTH)}</p>
                <button type="button" class="calendar-arrow" aria-hidden="true">{"→"}</button>
            </div>
            <div class="calendar-weekdays">
                { for WEEKDAYS.iter().map(|d| html! { <span>{*d}</span> }) }
            </div>
            <div class="calendar-days">
                { for cells.iter().map(|cell| match cell {
                    CalendarCell::Blank => html! { <span></span> },
                    CalendarCell::Day { day, mark } => {
                        let class = match mark {
                            DayMark::Selected => "calendar-day selected",
                            DayMark::Highlighted => "calendar-day highlighted",
                            DayMark::Plain => "calendar-day",
                        };
                        html! { <div {class}>{*day}</div> }
                    }
                }) }
            </div>
            <style>
                {r#"
                .calendar-card {
                    border-radius: 1.5rem;
                    border: 1px solid #e5e5e5;
                    background: rgba(255, 255, 255, 0.8);
                    padding: 1rem 1.25rem;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.05);
                    backdrop-filter: blur(24px);
                }

                .calendar-header {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    margin-bottom: 0.75rem;
                }

                .calendar-title {
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #262626;
                }

                .calendar-arrow {
                    width: 1.75rem;
                    height: 1.75rem;
                    border: none;
                    border-radius: 9999px;
                    background: transparent;
                    color: #737373;
                    cursor: default;
                }

                .calendar-weekdays,
                .calendar-days {
                    display: grid;
                    grid-template-columns: repeat(7, 1fr);
                    text-align: center;
                }

                .calendar-weekdays {
                    margin-bottom: 0.5rem;
                    font-size: 11px;
                    color: #a3a3a3;
                }

                .calendar-days {
                    gap: 0.25rem;
                    font-size: 0.75rem;
                }

                .calendar-day {
                    display: flex;
                    aspect-ratio: 1 / 1;
                    align-items: center;
                    justify-content: center;
                    border-radius: 9999px;
                    color: #404040;
                }

                .calendar-day:hover {
                    background: #f5f5f5;
                }

                .calendar-day.selected {
                    background: #2563eb;
                    color: #ffffff;
                }

                .calendar-day.highlighted {
                    background: #dbeafe;
                    color: #1d4ed8;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn days(cells: &[CalendarCell]) -> Vec<u32> {
        cells
            .iter()
            .filter_map(|c| match c {
                CalendarCell::Day { day, .. } => Some(*day),
                CalendarCell::Blank => None,
            })
            .collect()
    }

    #[test]
    fn march_2024_starts_on_friday() {
        let cells = month_grid(2024, 3, SELECTED_DAY, HIGHLIGHTED_DAY).unwrap();
        let blanks = cells.iter().take_while(|c| **c == CalendarCell::Blank).count();
        assert_eq!(blanks, 4);
        assert_eq!(days(&cells), (1..=31).collect::<Vec<_>>());
    }

    #[test]
    fn only_two_days_are_marked() {
        let cells = month_grid(2024, 3, 23, 22).unwrap();
        let marked: Vec<_> = cells
            .iter()
            .filter_map(|c| match c {
                CalendarCell::Day { day, mark } if *mark != DayMark::Plain => Some((*day, *mark)),
                _ => None,
            })
            .collect();
        assert_eq!(marked, vec![(22, DayMark::Highlighted), (23, DayMark::Selected)]);
    }

    #[test]
    fn leap_february_and_december_rollover() {
        assert_eq!(days(&month_grid(2024, 2, 0, 0).unwrap()).len(), 29);
        assert_eq!(days(&month_grid(2023, 12, 0, 0).unwrap()).len(), 31);
    }

    #[test]
    fn invalid_month_yields_nothing() {
        assert!(month_grid(2024, 13, 1, 2).is_none());
    }

    #[test]
    fn title_reads_month_and_year() {
        assert_eq!(month_title(2024, 3), "March 2024");
    }
}
