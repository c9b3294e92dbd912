use crate::panels::section_heading;
use crate::sample::{self, StationKind, DISRUPTED_STATIONS, NETWORK_LINKS, NETWORK_STATS, STATIONS};
use crate::theme::Theme;
use crate::toast::Toasts;
use eframe::egui::{self, RichText};
use egui_plot::{Legend, Line, Plot, PlotPoint, Points, Text};

const VIEW_TYPES: [&str; 3] = ["Geographic", "Schematic", "3D View"];

pub struct NetworkPanel {
    view_type: usize,
    show_trains: bool,
    show_disruptions: bool,
    live_trains: Vec<[f64; 2]>,
}

impl NetworkPanel {
    pub fn new() -> Self {
        Self {
            view_type: 0,
            show_trains: true,
            show_disruptions: true,
            live_trains: sample::live_train_positions(8),
        }
    }

    pub fn refresh(&mut self) {
        self.live_trains = sample::live_train_positions(8);
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, theme: &Theme, toasts: &mut Toasts) {
        ui.horizontal(|ui| {
            egui::ComboBox::from_label("View Type")
                .selected_text(VIEW_TYPES[self.view_type])
                .show_ui(ui, |ui| {
                    for (index, view_type) in VIEW_TYPES.iter().enumerate() {
                        ui.selectable_value(&mut self.view_type, index, *view_type);
                    }
                });

            ui.checkbox(&mut self.show_trains, "Show Live Trains");
            ui.checkbox(&mut self.show_disruptions, "Show Disruptions");

            if ui.button("Refresh").clicked() {
                self.refresh();
                toasts.success("Network data refreshed!");
            }
        });

        section_heading(ui, "Railway Network Map");
        Plot::new("network_map")
            .height(380.0)
            .legend(Legend::default())
            .data_aspect(1.0)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .show_axes([false, false])
            .show_grid(false)
            .show(ui, |plot_ui| {
                for (from, to) in NETWORK_LINKS {
                    let segment = vec![
                        [STATIONS[from].x, STATIONS[from].y],
                        [STATIONS[to].x, STATIONS[to].y],
                    ];
                    plot_ui.line(Line::new(segment).color(theme.accent_muted).width(2.5));
                }

                for kind in [StationKind::MajorHub, StationKind::Terminal, StationKind::Junction] {
                    let members: Vec<&sample::Station> =
                        STATIONS.iter().filter(|station| station.kind == kind).collect();
                    let Some(first) = members.first() else {
                        continue;
                    };
                    let coords: Vec<[f64; 2]> =
                        members.iter().map(|station| [station.x, station.y]).collect();
                    plot_ui.points(
                        Points::new(coords)
                            .radius(first.size)
                            .color(theme.accent_primary)
                            .name(kind.label()),
                    );
                }

                for station in &STATIONS {
                    plot_ui.text(Text::new(
                        PlotPoint::new(station.x, station.y + 0.45),
                        RichText::new(station.name).color(theme.text_primary).size(12.0),
                    ));
                }

                if self.show_trains {
                    plot_ui.points(
                        Points::new(self.live_trains.clone())
                            .radius(3.0)
                            .color(theme.success)
                            .name("Live Trains"),
                    );
                }

                if self.show_disruptions {
                    let coords: Vec<[f64; 2]> = DISRUPTED_STATIONS
                        .iter()
                        .map(|&index| [STATIONS[index].x, STATIONS[index].y])
                        .collect();
                    plot_ui.points(
                        Points::new(coords)
                            .radius(5.0)
                            .color(theme.danger)
                            .name("Disruptions"),
                    );
                }
            });

        section_heading(ui, "Network Statistics");
        ui.columns(3, |columns| {
            for (index, (label, value)) in NETWORK_STATS.iter().enumerate() {
                let column = &mut columns[index % 3];
                theme.card_frame().show(column, |ui| {
                    ui.label(RichText::new(*label).color(theme.text_muted).size(12.0));
                    ui.label(RichText::new(*value).strong().size(18.0));
                });
            }
        });
    }
}
