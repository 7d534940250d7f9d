use crate::engine::calculations::{percent_of, round_to, CarbonCalculator};
use crate::engine::constants::*;
use crate::models::{Breakdown, SavingsPotential, SavingsSuggestion, Tip, TipKind};

impl CarbonCalculator<'_> {
    /// Reduction tips from breakdown magnitudes. Each rule fires independently;
    /// a single praise tip is returned when none do.
    pub fn generate_tips(&self, values: &Breakdown, cooking_method: &str) -> Vec<Tip> {
        let mut tips = Vec::new();

        // Unknown methods never produce a cooking tip
        if values.cooking_energy > values.ingredient_base * COOKING_TIP_SHARE {
            if let Some(factor) = self.tables().cooking_factor(cooking_method) {
                if factor >= HIGH_ENERGY_COOKING_FACTOR {
                    let cut = round_to((factor - LOW_ENERGY_COOKING_FACTOR) * 100.0, 0);
                    tips.push(Tip::new(
                        TipKind::Cooking,
                        format!(
                            "{} is a high-energy cooking method; steaming or boiling instead can cut cooking emissions by {}%",
                            cooking_method, cut
                        ),
                        round_to(
                            values.cooking_energy * (factor - LOW_ENERGY_COOKING_FACTOR) / factor,
                            TOTAL_DECIMALS,
                        ),
                    ));
                }
            }
        }

        if values.seasonal > 0.0 {
            tips.push(Tip::new(
                TipKind::Seasonal,
                "Off-season ingredients detected; choosing in-season produce cuts their emissions by 20%",
                round_to(values.seasonal, TOTAL_DECIMALS),
            ));
        }

        if values.transportation > values.ingredient_base * TRANSPORT_TIP_SHARE {
            tips.push(Tip::new(
                TipKind::Transport,
                "Local ingredients travel less; prefer local, in-season produce",
                round_to(values.transportation, TOTAL_DECIMALS),
            ));
        }

        if values.preservation > 0.0 {
            tips.push(Tip::new(
                TipKind::Preservation,
                "Fresh ingredients have a lower footprint; use fewer frozen and canned goods",
                round_to(values.preservation, TOTAL_DECIMALS),
            ));
        }

        if tips.is_empty() {
            tips.push(Tip::new(
                TipKind::Praise,
                "This meal is already low-impact. Keep it up!",
                0.0,
            ));
        }

        tips
    }

    /// Up to three optimisation estimates: gentler cooking, in-season
    /// produce, local sourcing.
    ///
    /// Overlaps with [`generate_tips`](Self::generate_tips); do not add the two.
    pub fn savings_potential(&self, values: &Breakdown, cooking_method: &str) -> SavingsPotential {
        let mut max_savings = 0.0;
        let mut suggestions = Vec::new();

        if let Some(factor) = self
            .tables()
            .cooking_factor(cooking_method)
            .filter(|f| *f > LOW_ENERGY_COOKING_FACTOR)
        {
            let savings = values.cooking_energy * (factor - LOW_ENERGY_COOKING_FACTOR) / factor;
            max_savings += savings;
            suggestions.push(SavingsSuggestion {
                action: "Switch to steaming or boiling".to_string(),
                savings: round_to(savings, TOTAL_DECIMALS),
                percent: percent_of(savings, values.ingredient_base + values.cooking_energy),
            });
        }

        if values.seasonal > 0.0 {
            max_savings += values.seasonal;
            suggestions.push(SavingsSuggestion {
                action: "Choose in-season ingredients".to_string(),
                savings: round_to(values.seasonal, TOTAL_DECIMALS),
                percent: percent_of(values.seasonal, values.ingredient_base),
            });
        }

        if values.transportation > 0.0 {
            let savings = values.transportation * LOCAL_SOURCING_RECOVERABLE;
            max_savings += savings;
            suggestions.push(SavingsSuggestion {
                action: "Choose local ingredients".to_string(),
                savings: round_to(savings, TOTAL_DECIMALS),
                percent: percent_of(savings, values.ingredient_base),
            });
        }

        SavingsPotential {
            max_savings: round_to(max_savings, TOTAL_DECIMALS),
            suggestions,
        }
    }
}
