//! Fabricated demo data for every panel. Values are either literals lifted
//! from the operations mockup or fresh pseudo-random draws; nothing here is
//! backed by a real system.

use chrono::NaiveDate;
use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Metric {
    pub label: &'static str,
    pub value: String,
    pub delta: String,
    /// Whether the delta should read as an improvement.
    pub positive: bool,
}

pub fn dashboard_metrics() -> Vec<Metric> {
    vec![
        Metric {
            label: "Active Trains",
            value: "127".to_string(),
            delta: "+12 from yesterday".to_string(),
            positive: true,
        },
        Metric {
            label: "On-Time Performance",
            value: "94.3%".to_string(),
            delta: "+2.1%".to_string(),
            positive: true,
        },
        Metric {
            label: "Network Utilization",
            value: "78.5%".to_string(),
            delta: "-3.2%".to_string(),
            positive: false,
        },
        Metric {
            label: "Active Disruptions",
            value: "3".to_string(),
            delta: "-2".to_string(),
            positive: true,
        },
    ]
}

#[derive(Debug, Clone)]
pub struct DirectionSeries {
    pub name: &'static str,
    pub counts: Vec<f64>,
}

/// One simulated day of train movements, hourly, per direction.
pub fn movement_series() -> Vec<DirectionSeries> {
    let mut rng = rand::thread_rng();
    let mut draw = |low: u32, high: u32| -> Vec<f64> {
        (0..24).map(|_| rng.gen_range(low..high) as f64).collect()
    };

    vec![
        DirectionSeries {
            name: "Northbound",
            counts: draw(10, 30),
        },
        DirectionSeries {
            name: "Southbound",
            counts: draw(10, 30),
        },
        DirectionSeries {
            name: "Eastbound",
            counts: draw(5, 20),
        },
        DirectionSeries {
            name: "Westbound",
            counts: draw(5, 20),
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Impact {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone)]
pub struct Issue {
    pub kind: &'static str,
    pub location: &'static str,
    pub impact: Impact,
    pub trains: u32,
}

pub fn current_issues() -> Vec<Issue> {
    vec![
        Issue {
            kind: "Delay",
            location: "Central Station",
            impact: Impact::High,
            trains: 5,
        },
        Issue {
            kind: "Maintenance",
            location: "Track 3-4",
            impact: Impact::Medium,
            trains: 2,
        },
        Issue {
            kind: "Weather",
            location: "Northern Line",
            impact: Impact::Low,
            trains: 1,
        },
    ]
}

pub const DASHBOARD_RECOMMENDATIONS: &str = "\
Optimization opportunities detected:

1. Reroute Train 547 via Track 2 to avoid Central Station congestion
2. Adjust schedule for Northern Line - 5 min intervals recommended
3. Preventive maintenance suggested for Track 7-8 based on usage patterns";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainStatus {
    OnTime,
    Delayed,
    Early,
}

impl TrainStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::OnTime => "On Time",
            Self::Delayed => "Delayed",
            Self::Early => "Early",
        }
    }
}

#[derive(Debug, Clone)]
pub struct TimetableRow {
    pub train_id: String,
    pub station: &'static str,
    pub arrival: String,
    pub departure: String,
    pub platform: u32,
    pub status: TrainStatus,
}

pub const STATION_NAMES: [&str; 5] = [
    "Central Station",
    "North Terminal",
    "East Junction",
    "South Plaza",
    "West End",
];

fn format_minutes(total: u32) -> String {
    format!("{:02}:{:02}", (total / 60) % 24, total % 60)
}

/// Twenty trains, five stops each, departing every 15 minutes from 05:00.
pub fn timetable_rows() -> Vec<TimetableRow> {
    let mut rng = rand::thread_rng();
    let mut rows = Vec::with_capacity(20 * STATION_NAMES.len());

    for train in 0..20u32 {
        let first_departure = 5 * 60 + train * 15;
        for (stop, &station) in STATION_NAMES.iter().enumerate() {
            let arrival = first_departure + stop as u32 * 12;
            let status = match rng.gen_range(0..5) {
                0..=2 => TrainStatus::OnTime,
                3 => TrainStatus::Delayed,
                _ => TrainStatus::Early,
            };
            rows.push(TimetableRow {
                train_id: format!("TR{}", 1000 + train),
                station,
                arrival: format_minutes(arrival),
                departure: format_minutes(arrival + 2),
                platform: rng.gen_range(1..6),
                status,
            });
        }
    }

    rows
}

#[derive(Debug, Clone)]
pub struct GanttSpan {
    pub train: String,
    pub line: u8,
    pub start_hour: f64,
    pub duration_hours: f64,
}

/// Ten trains starting every 20 minutes from 06:00, each running 2-5 hours.
pub fn gantt_spans() -> Vec<GanttSpan> {
    let mut rng = rand::thread_rng();
    (0..10)
        .map(|i| GanttSpan {
            train: format!("Train {}", 101 + i),
            line: (i % 4) as u8 + 1,
            start_hour: 6.0 + i as f64 * 20.0 / 60.0,
            duration_hours: rng.gen_range(2..6) as f64,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StationKind {
    MajorHub,
    Terminal,
    Junction,
}

impl StationKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::MajorHub => "Major Hub",
            Self::Terminal => "Terminal",
            Self::Junction => "Junction",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Station {
    pub name: &'static str,
    pub x: f64,
    pub y: f64,
    pub size: f32,
    pub kind: StationKind,
}

/// Schematic station coordinates, hub at the origin.
pub const STATIONS: [Station; 7] = [
    Station {
        name: "Central",
        x: 0.0,
        y: 0.0,
        size: 9.0,
        kind: StationKind::MajorHub,
    },
    Station {
        name: "North",
        x: 2.0,
        y: 4.5,
        size: 6.0,
        kind: StationKind::Terminal,
    },
    Station {
        name: "South",
        x: -3.9,
        y: -2.4,
        size: 6.0,
        kind: StationKind::Terminal,
    },
    Station {
        name: "East",
        x: 3.8,
        y: 3.6,
        size: 6.0,
        kind: StationKind::Terminal,
    },
    Station {
        name: "West",
        x: 1.6,
        y: -2.4,
        size: 6.0,
        kind: StationKind::Terminal,
    },
    Station {
        name: "Junction A",
        x: 1.1,
        y: 1.7,
        size: 4.5,
        kind: StationKind::Junction,
    },
    Station {
        name: "Junction B",
        x: -1.4,
        y: -1.3,
        size: 4.5,
        kind: StationKind::Junction,
    },
];

/// Spokes from the hub to the four terminals, as STATIONS indices.
pub const NETWORK_LINKS: [(usize, usize); 4] = [(0, 1), (0, 2), (0, 3), (0, 4)];

/// Stations currently flagged with a disruption, as STATIONS indices.
pub const DISRUPTED_STATIONS: [usize; 2] = [0, 5];

pub fn live_train_positions(count: usize) -> Vec<[f64; 2]> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| [rng.gen_range(-4.0..4.2), rng.gen_range(-2.8..4.8)])
        .collect()
}

pub const NETWORK_STATS: [(&str, &str); 6] = [
    ("Total Track Length", "2,847 km"),
    ("Stations", "147"),
    ("Daily Passengers", "1.2M"),
    ("Active Signals", "3,421"),
    ("Network Health", "96.7%"),
    ("Maintenance Due", "12 sections"),
];

#[derive(Debug, Clone)]
pub struct DocumentHit {
    pub title: &'static str,
    pub relevance: f32,
    pub excerpt: &'static str,
    pub doc_type: &'static str,
    pub date: &'static str,
}

/// Canned search results; the query only matters to the caller's display.
pub fn document_hits() -> Vec<DocumentHit> {
    vec![
        DocumentHit {
            title: "Railway Safety Regulations 2024 - Section 5.3",
            relevance: 0.95,
            excerpt: "Level crossing safety protocols require automated barrier systems \
                      with redundant sensors...",
            doc_type: "Regulation",
            date: "2024-03-15",
        },
        DocumentHit {
            title: "Operational Manual - Track Maintenance Standards",
            relevance: 0.87,
            excerpt: "Regular inspection intervals for level crossings must not exceed \
                      30 days...",
            doc_type: "Manual",
            date: "2024-01-10",
        },
        DocumentHit {
            title: "EU Directive 2023/847 - Railway Interoperability",
            relevance: 0.82,
            excerpt: "Cross-border operations require compliance with unified safety \
                      standards...",
            doc_type: "Standard",
            date: "2023-11-20",
        },
    ]
}

pub const KNOWLEDGE_BASE_STATS: [(&str, &str, &str); 4] = [
    ("Total Documents", "12,847", "234 added this month"),
    ("Regulations", "3,421", "12 updated"),
    ("Standards", "1,893", "5 new"),
    ("Last Sync", "2 hours ago", "up to date"),
];

#[derive(Debug, Clone)]
pub struct SimulationRequest {
    pub simulation_type: String,
    pub time_horizon: String,
    pub confidence_level: u8,
    pub iterations: u32,
    pub algorithm: String,
    pub seed: u32,
    pub include_weather: bool,
}

#[derive(Debug, Clone)]
pub struct SimulationOutcome {
    pub baseline: Vec<[f64; 2]>,
    pub optimized: Vec<[f64; 2]>,
    pub findings: Vec<Metric>,
    pub recommendations: [&'static str; 3],
}

/// Smooth baseline/optimized performance curves over 24 hours. The request
/// only shapes the labels; the curves are fixed sinusoids like the mockup's.
pub fn simulation_outcome(_request: &SimulationRequest) -> SimulationOutcome {
    let sample = |offset: f64, amplitude: f64| -> Vec<[f64; 2]> {
        (0..100)
            .map(|i| {
                let x = i as f64 * 24.0 / 99.0;
                [x, offset + amplitude * (x / 4.0).sin()]
            })
            .collect()
    };

    SimulationOutcome {
        baseline: sample(75.0, 10.0),
        optimized: sample(85.0, 8.0),
        findings: vec![
            Metric {
                label: "Performance Gain",
                value: "+13.7%".to_string(),
                delta: "vs baseline".to_string(),
                positive: true,
            },
            Metric {
                label: "Cost Savings",
                value: "EUR 127,500".to_string(),
                delta: "per month".to_string(),
                positive: true,
            },
            Metric {
                label: "CO2 Reduction",
                value: "-8.2%".to_string(),
                delta: "emissions".to_string(),
                positive: true,
            },
        ],
        recommendations: [
            "Implement dynamic speed adjustments",
            "Optimize platform assignments",
            "Adjust maintenance windows",
        ],
    }
}

#[derive(Debug, Clone)]
pub struct OptimizationSummary {
    pub headline: String,
    pub detail: &'static str,
}

pub fn optimization_summary(goal: &str) -> OptimizationSummary {
    OptimizationSummary {
        headline: format!("Optimization complete! 12% improvement in {goal} achieved."),
        detail: "New optimized timetable ready for review. Key improvements: reduced \
                 platform conflicts by 23%, improved connection times by 15%.",
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportRequest {
    pub report_type: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportBundle {
    pub request: ReportRequest,
    pub kpis: Vec<Metric>,
    /// One performance score per day from `request.start`, inclusive.
    pub daily_performance: Vec<f64>,
    pub service_breakdown: [(&'static str, f64); 4],
}

pub fn report_bundle(request: &ReportRequest) -> ReportBundle {
    let mut rng = rand::thread_rng();
    let days = (request.end - request.start).num_days().max(0) as usize + 1;
    let daily_performance = (0..days)
        .map(|_| 85.0 + rng.gen_range(-5.0..5.0))
        .collect();

    ReportBundle {
        request: request.clone(),
        kpis: vec![
            Metric {
                label: "Overall Performance",
                value: "92.3%".to_string(),
                delta: "+3.2%".to_string(),
                positive: true,
            },
            Metric {
                label: "Revenue",
                value: "EUR 4.2M".to_string(),
                delta: "+8.5%".to_string(),
                positive: true,
            },
            Metric {
                label: "Passenger Satisfaction",
                value: "4.3/5".to_string(),
                delta: "+0.2".to_string(),
                positive: true,
            },
            Metric {
                label: "Safety Score",
                value: "98.7%".to_string(),
                delta: "+1.1%".to_string(),
                positive: true,
            },
        ],
        daily_performance,
        service_breakdown: [
            ("On-Time", 75.0),
            ("Delays < 5min", 15.0),
            ("Delays > 5min", 8.0),
            ("Cancelled", 2.0),
        ],
    }
}

pub const DATA_SOURCES: [(&str, &str, &str); 5] = [
    ("National Timetable Database", "Connected", "2 min ago"),
    ("Network Infrastructure DB", "Connected", "5 min ago"),
    ("Weather API", "Connected", "Real-time"),
    ("Maintenance Records", "Connected", "1 hour ago"),
    ("Regulatory Database", "Syncing", "In progress"),
];

pub const DEMO_USERS: [(&str, &str, &str, &str); 4] = [
    ("John Smith", "Admin", "IT", "2 min ago"),
    ("Emma Johnson", "Planner", "Operations", "1 hour ago"),
    ("Michael Brown", "Analyst", "Analytics", "3 hours ago"),
    ("Sarah Davis", "Viewer", "Management", "1 day ago"),
];

#[cfg(test)]
mod tests {
    use super::{
        gantt_spans, movement_series, report_bundle, simulation_outcome, timetable_rows,
        ReportRequest, SimulationRequest, STATION_NAMES,
    };
    use chrono::NaiveDate;

    #[test]
    fn movement_series_covers_one_day_per_direction() {
        let series = movement_series();
        assert_eq!(series.len(), 4);
        for direction in &series {
            assert_eq!(direction.counts.len(), 24);
        }
    }

    #[test]
    fn timetable_has_one_row_per_train_and_stop() {
        let rows = timetable_rows();
        assert_eq!(rows.len(), 20 * STATION_NAMES.len());
        for row in &rows {
            assert!((1..=5).contains(&row.platform));
            assert_eq!(row.arrival.len(), 5);
            assert_eq!(row.departure.len(), 5);
        }
    }

    #[test]
    fn gantt_spans_stay_within_advertised_bounds() {
        let spans = gantt_spans();
        assert_eq!(spans.len(), 10);
        for span in &spans {
            assert!((1..=4).contains(&span.line));
            assert!((2.0..=5.0).contains(&span.duration_hours));
            assert!(span.start_hour >= 6.0);
        }
    }

    #[test]
    fn simulation_curves_share_the_time_axis() {
        let request = SimulationRequest {
            simulation_type: "Traffic Flow".to_string(),
            time_horizon: "1 Day".to_string(),
            confidence_level: 95,
            iterations: 1000,
            algorithm: "Genetic Algorithm".to_string(),
            seed: 42,
            include_weather: true,
        };
        let outcome = simulation_outcome(&request);
        assert_eq!(outcome.baseline.len(), 100);
        assert_eq!(outcome.optimized.len(), 100);
        for (a, b) in outcome.baseline.iter().zip(&outcome.optimized) {
            assert_eq!(a[0], b[0]);
        }
    }

    #[test]
    fn report_covers_the_requested_range_inclusive() {
        let request = ReportRequest {
            report_type: "Executive Summary".to_string(),
            start: NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date"),
            end: NaiveDate::from_ymd_opt(2024, 3, 31).expect("valid date"),
        };
        let bundle = report_bundle(&request);
        assert_eq!(bundle.daily_performance.len(), 31);

        let total: f64 = bundle
            .service_breakdown
            .iter()
            .map(|(_, share)| share)
            .sum();
        assert_eq!(total, 100.0);
    }

    #[test]
    fn degenerate_report_range_still_yields_one_day() {
        let day = NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date");
        let request = ReportRequest {
            report_type: "Safety Metrics".to_string(),
            start: day,
            end: day,
        };
        assert_eq!(report_bundle(&request).daily_performance.len(), 1);
    }
}
