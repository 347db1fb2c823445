use chrono::{Datelike as _, Weekday};
use egui::{Align, Button, Color32, ComboBox, Layout, Response, RichText, Ui, Vec2, Visuals};

use super::MonthView;
use crate::grid::DayCell;
use crate::range::BlockLength;

impl MonthView {
    /// Draws the notice, the month navigation with the block length selector,
    /// and the day grid. Pointer movement and clicks are turned into hooks.
    pub fn ui(&mut self, ui: &mut Ui) -> Response {
        let height = 20.0;
        let spacing = 2.0;

        ui.vertical(|ui| {
            ui.spacing_mut().item_spacing = Vec2::splat(spacing);

            if let Some(notice) = self.calendar.notice() {
                ui.label(RichText::new(&notice.text).italics());
            }

            self.navigation_ui(ui);
            self.days_ui(ui, height);
        })
        .response
    }

    fn navigation_ui(&mut self, ui: &mut Ui) {
        let mut step = 0;
        ui.horizontal(|ui| {
            if ui.button("<<").on_hover_text("subtract one year").clicked() {
                step = -12;
            }
            if ui.button("<").on_hover_text("subtract one month").clicked() {
                step = -1;
            }
            ui.label(format!(
                "{} {}",
                month_name(self.calendar.month()),
                self.calendar.year()
            ));
            if ui.button(">").on_hover_text("add one month").clicked() {
                step = 1;
            }
            if ui.button(">>").on_hover_text("add one year").clicked() {
                step = 12;
            }

            self.week_select_ui(ui);
        });

        if step != 0 {
            if let Err(err) = self.step_months(step) {
                log::warn!("Can't navigate: {err}");
            }
        }
    }

    fn week_select_ui(&mut self, ui: &mut Ui) {
        let Some(select) = self.calendar.week_select() else {
            return;
        };
        let values: Vec<BlockLength> = select.options.iter().map(|option| option.value).collect();
        let before = select.selected().map(|option| option.value);
        let mut current = before;

        ComboBox::from_id_salt("multi_week_select")
            .selected_text(current.map(|v| format!("{v} days")).unwrap_or_default())
            .show_ui(ui, |ui| {
                for value in values {
                    ui.selectable_value(&mut current, Some(value), format!("{value} days"))
                        .on_hover_text(match value.weeks() {
                            1 => "1 week".to_owned(),
                            weeks => format!("{weeks} weeks"),
                        });
                }
            });

        if current != before {
            if let Some(value) = current {
                self.choose_block_length(value);
            }
        }
    }

    fn days_ui(&mut self, ui: &mut Ui, height: f32) {
        let today = chrono::Local::now().date_naive();
        let month = self.calendar.month();
        let selected = self.calendar.selected();
        let weeks: Vec<Vec<DayCell>> = self.grid().weeks().map(<[DayCell]>::to_vec).collect();

        let mut hovered = None;
        let mut clicked = None;

        egui::Grid::new("multi_week_days")
            .num_columns(7)
            .spacing(Vec2::new(1.0, 2.0))
            .show(ui, |ui| {
                let mut weekday = self.calendar.week_start();
                for _ in 0..7 {
                    ui.with_layout(Layout::top_down_justified(Align::Center), |ui| {
                        ui.label(weekday_name(weekday));
                    });
                    weekday = weekday.succ();
                }
                ui.end_row();

                for (row, week) in weeks.iter().enumerate() {
                    for (column, cell) in week.iter().enumerate() {
                        let date = cell.date;
                        let fill_color = day_fill(cell, Some(date) == selected, ui.visuals());

                        let mut text_color = ui.visuals().widgets.inactive.text_color();
                        if date.month() != month {
                            text_color = text_color.linear_multiply(0.5);
                        }
                        if Some(date) == selected {
                            text_color = ui.visuals().strong_text_color();
                        }

                        let text = RichText::new(date.day().to_string()).color(text_color);
                        let response = ui.add(
                            Button::new(text)
                                .fill(fill_color)
                                .min_size(Vec2::new(height * 1.5, height)),
                        );

                        if date == today {
                            // Encircle today's date
                            let stroke = ui.visuals().widgets.inactive.fg_stroke;
                            ui.painter()
                                .circle_stroke(response.rect.center(), 8.0, stroke);
                        }

                        if response.hovered() {
                            hovered = Some(row * 7 + column);
                        }
                        if response.clicked() {
                            clicked = Some(date);
                        }
                    }
                    ui.end_row();
                }
            });

        if hovered != self.pointer_cell {
            match hovered {
                Some(index) => self.hover(Some(index)),
                None => self.leave_grid(),
            }
            self.pointer_cell = hovered;
        }

        if let Some(date) = clicked {
            if let Err(err) = self.select_date(date) {
                log::warn!("Can't select {date}: {err}");
            }
        }
    }
}

/// Background of a day: the selected date, then hover, then the selected block.
fn day_fill(cell: &DayCell, is_selected_date: bool, visuals: &Visuals) -> Color32 {
    let selection = visuals.selection.bg_fill;
    if is_selected_date && cell.is_selected() {
        selection
    } else if cell.is_in_range() {
        selection.linear_multiply(0.6)
    } else if cell.is_week() {
        selection.linear_multiply(0.3)
    } else {
        visuals.extreme_bg_color
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "Su",
    }
}

fn month_name(i: u32) -> &'static str {
    match i {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "",
    }
}
