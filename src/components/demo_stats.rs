use crate::error::{WallkitError, WallkitResult};
use crate::html::{attr, escape_html};
use crate::render::RenderContext;
use serde::Deserialize;
use std::fmt::{self, Write};

use super::Render;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct DemoStatsProps {
    pub total: u32,
    pub stable: u32,
    pub beta: u32,
    pub experimental: u32,
    pub version: String,
}

/// Component counts and library version, with a stable-percentage bar.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoStats {
    total: u32,
    stable: u32,
    beta: u32,
    experimental: u32,
    version: String,
}

impl DemoStats {
    pub fn new(props: DemoStatsProps) -> WallkitResult<Self> {
        if props.stable > props.total {
            return Err(WallkitError::ValueOutOfRange {
                property: "stable".to_string(),
                value: props.stable.to_string(),
                range: format!("0-{}", props.total),
            });
        }
        Ok(Self {
            total: props.total,
            stable: props.stable,
            beta: props.beta,
            experimental: props.experimental,
            version: props.version.trim().to_string(),
        })
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn stable(&self) -> u32 {
        self.stable
    }

    pub fn beta(&self) -> u32 {
        self.beta
    }

    pub fn experimental(&self) -> u32 {
        self.experimental
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Percentage of stable components, rounded; 0 when there are none.
    pub fn progress(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (f64::from(self.stable) / f64::from(self.total) * 100.0).round() as u32
    }

    fn counters(&self) -> [(&'static str, u32); 4] {
        [
            ("Components", self.total),
            ("Stable", self.stable),
            ("Beta", self.beta),
            ("Experimental", self.experimental),
        ]
    }
}

impl Render for DemoStats {
    fn is_blank(&self) -> bool {
        self.total == 0 && self.beta == 0 && self.experimental == 0 && self.version.is_empty()
    }

    fn render_into(&self, _ctx: &RenderContext<'_>, out: &mut String) -> fmt::Result {
        write!(out, "<div class=\"wallkit-stats\">")?;
        for (label, value) in self.counters() {
            let value = value.to_string();
            write!(
                out,
                "<div class=\"wallkit-stats__item\"><span class=\"wallkit-stats__value\"{}>{}</span><span class=\"wallkit-stats__label\">{}</span></div>",
                attr([("data-wallkit-counter", value.as_str())]),
                value,
                label
            )?;
        }

        let progress = self.progress();
        write!(
            out,
            "<div class=\"wallkit-stats__progress\" role=\"progressbar\" aria-valuenow=\"{0}\" aria-valuemin=\"0\" aria-valuemax=\"100\"><div class=\"wallkit-stats__progress-bar\" style=\"width: {0}%\"></div></div>",
            progress
        )?;
        if !self.version.is_empty() {
            write!(
                out,
                "<span class=\"wallkit-stats__version\">v{}</span>",
                escape_html(self.version.strip_prefix('v').unwrap_or(&self.version))
            )?;
        }
        write!(out, "</div>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(total: u32, stable: u32) -> DemoStats {
        DemoStats::new(DemoStatsProps {
            total,
            stable,
            version: "1.0.0".to_string(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_progress() {
        assert_eq!(stats(0, 0).progress(), 0);
        assert_eq!(stats(10, 5).progress(), 50);
        assert_eq!(stats(3, 1).progress(), 33);
        assert_eq!(stats(3, 2).progress(), 67);
        assert_eq!(stats(7, 7).progress(), 100);
    }

    #[test]
    fn test_stable_above_total_rejected() {
        let err = DemoStats::new(DemoStatsProps {
            total: 2,
            stable: 3,
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, WallkitError::ValueOutOfRange { .. }));
    }

    #[test]
    fn test_counter_attributes() {
        let html = DemoStats::new(DemoStatsProps {
            total: 12,
            stable: 9,
            beta: 2,
            experimental: 1,
            version: "v2.1.0".to_string(),
        })
        .unwrap()
        .render()
        .into_string();
        assert!(html.contains("data-wallkit-counter=\"12\">12</span>"));
        assert!(html.contains("data-wallkit-counter=\"1\">1</span>"));
        assert!(html.contains("style=\"width: 75%\""));
        assert!(html.contains(">v2.1.0</span>"));
    }

    #[test]
    fn test_version_prefix_added_once() {
        let version_of = |version: &str| {
            DemoStats::new(DemoStatsProps {
                total: 1,
                version: version.to_string(),
                ..Default::default()
            })
            .unwrap()
            .to_string()
        };
        assert!(version_of("1.0").contains(">v1.0</span>"));
        assert!(version_of("v1.0").contains(">v1.0</span>"));
        assert!(version_of("vv1").contains(">vv1</span>"));
    }

    #[test]
    fn test_default_stats_render_empty() {
        let stats = DemoStats::new(DemoStatsProps::default()).unwrap();
        assert_eq!(stats.to_string(), "");
    }
}
