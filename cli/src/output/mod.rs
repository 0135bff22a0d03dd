//! Report rendering for the terminal and for `--json`

mod table;

use table::Table;

use serde::Serialize;
use sunderlog_core::report::{format_percentage, format_top};
use sunderlog_core::{ConsumableReport, IngestStats, PlayerCount, SunderReport};

pub fn render_sunder_report(report: &SunderReport) -> String {
    let mut table = Table::new(
        format!(
            "{} Sunder Statistics ({} tracked deaths)",
            report.encounter, report.tracked_deaths
        ),
        &[
            "Player",
            "Effective",
            "Effective %",
            "Unnecessary",
            "Top Unnecessary",
        ],
    );
    for row in &report.rows {
        table.push_row(vec![
            row.player.clone(),
            row.effective_count.to_string(),
            format!("{}%", format_percentage(row.effective_pct)),
            row.unnecessary_count.to_string(),
            format_top(&row.top_unnecessary),
        ]);
    }
    table.render()
}

pub fn render_sunder_counts(counts: &[PlayerCount]) -> String {
    count_table("Sunder Count by Player", "Sunders", counts).render()
}

pub fn render_consumables(report: &ConsumableReport) -> String {
    let mut potions = Table::new("Potion Usage", &["Player", "Total", "Potions"]);
    for row in &report.potions {
        potions.push_row(vec![
            row.player.clone(),
            row.total.to_string(),
            format_top(&row.by_potion),
        ]);
    }

    let runes = count_table("Rune Usage", "Runes", &report.runes);
    format!("{}\n{}", potions.render(), runes.render())
}

fn count_table(title: &str, count_column: &str, counts: &[PlayerCount]) -> Table {
    let mut table = Table::new(title, &["Player", count_column]);
    for entry in counts {
        table.push_row(vec![entry.player.clone(), entry.count.to_string()]);
    }
    table
}

// ─────────────────────────────────────────────────────────────────────────────
// JSON
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct JsonOutput<'a> {
    pub stats: &'a IngestStats,
    pub sunders: &'a SunderReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sunder_counts: Option<&'a [PlayerCount]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumables: Option<&'a ConsumableReport>,
}

impl JsonOutput<'_> {
    pub fn render(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sunderlog_core::report::TargetCount;
    use sunderlog_core::{PotionRow, SunderRow};

    fn sample_report() -> SunderReport {
        SunderReport {
            encounter: "BWL".to_string(),
            tracked_deaths: 5,
            rows: vec![
                SunderRow {
                    player: "Zizek".to_string(),
                    effective_count: 4,
                    effective_pct: 80.0,
                    unnecessary_count: 3,
                    top_unnecessary: vec![
                        TargetCount { name: "Blackwing Technician".to_string(), count: 2 },
                        TargetCount { name: "Blackwing Legionnaire".to_string(), count: 1 },
                    ],
                },
                SunderRow {
                    player: "Bruenor".to_string(),
                    effective_count: 2,
                    effective_pct: 40.0,
                    unnecessary_count: 0,
                    top_unnecessary: Vec::new(),
                },
            ],
        }
    }

    #[test]
    fn test_render_sunder_report() {
        let rendered = render_sunder_report(&sample_report());
        let lines: Vec<&str> = rendered.lines().collect();

        assert!(lines[1].contains("BWL Sunder Statistics (5 tracked deaths)"));
        assert!(lines[3].contains("Top Unnecessary"));

        let zizek = lines[5];
        assert!(zizek.contains("Zizek"));
        assert!(zizek.contains("80.00%"));
        assert!(zizek.contains("Blackwing Technician(2), Blackwing Legionnaire(1)"));

        let bruenor = lines[6];
        assert!(bruenor.contains("Bruenor"));
        assert!(bruenor.contains("40.00%"));
    }

    #[test]
    fn test_render_sunder_counts() {
        let counts = vec![
            PlayerCount { player: "Zizek".into(), count: 7 },
            PlayerCount { player: "Ardent".into(), count: 4 },
        ];
        let rendered = render_sunder_counts(&counts);
        let lines: Vec<&str> = rendered.lines().collect();

        assert!(lines[1].contains("Sunder Count by Player"));
        let cells: Vec<&str> = lines[5].trim_matches('|').split('|').map(str::trim).collect();
        assert_eq!(cells, vec!["Zizek", "7"]);
        let cells: Vec<&str> = lines[6].trim_matches('|').split('|').map(str::trim).collect();
        assert_eq!(cells, vec!["Ardent", "4"]);
    }

    #[test]
    fn test_render_consumables() {
        let report = ConsumableReport {
            potions: vec![PotionRow {
                player: "Bruenor".into(),
                total: 2,
                by_potion: vec![TargetCount { name: "Major Mana Potion".into(), count: 2 }],
            }],
            runes: vec![PlayerCount { player: "Ardent".into(), count: 1 }],
        };
        let rendered = render_consumables(&report);

        assert!(rendered.contains("Potion Usage"));
        assert!(rendered.contains("Major Mana Potion(2)"));
        assert!(rendered.contains("Rune Usage"));
        assert!(rendered.contains("Ardent"));
    }

    #[test]
    fn test_json_output_omits_unrequested_sections() {
        let stats = IngestStats::default();
        let report = sample_report();
        let json = JsonOutput {
            stats: &stats,
            sunders: &report,
            sunder_counts: None,
            consumables: None,
        }
        .render()
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["sunders"]["encounter"], "BWL");
        assert_eq!(value["sunders"]["tracked_deaths"], 5);
        assert_eq!(value["sunders"]["rows"][0]["player"], "Zizek");
        assert_eq!(value["sunders"]["rows"][0]["effective_pct"], 80.0);
        assert!(value.get("sunder_counts").is_none());
        assert!(value.get("consumables").is_none());
    }
}
