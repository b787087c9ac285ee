//! Weight and filter flags shared by every subcommand.
//!
//! `scoring_args!` declares a subcommand's argument struct with the common
//! weight and filter fields prepended, plus a `scoring` method resolving them.
//! Command-specific fields are passed through unchanged.

macro_rules! scoring_args {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $($fields:tt)*
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            /// Solar weight override.
            #[arg(long, value_name = "weight")]
            #[serde(default)]
            pub(crate) solar: Option<f64>,
            /// Wind weight override.
            #[arg(long, value_name = "weight")]
            #[serde(default)]
            pub(crate) wind: Option<f64>,
            /// Water weight override.
            #[arg(long, value_name = "weight")]
            #[serde(default)]
            pub(crate) water: Option<f64>,
            /// Industry proximity weight override.
            #[arg(long, value_name = "weight")]
            #[serde(default)]
            pub(crate) industry_proximity: Option<f64>,
            /// Grid proximity weight override.
            #[arg(long, value_name = "weight")]
            #[serde(default)]
            pub(crate) grid_proximity: Option<f64>,
            /// Land availability weight override.
            #[arg(long, value_name = "weight")]
            #[serde(default)]
            pub(crate) land_availability: Option<f64>,
            /// Only keep sites in this region.
            #[arg(long, value_name = "name")]
            #[serde(default)]
            pub(crate) region: Option<String>,
            /// Inclusive lower score bound.
            #[arg(long, value_name = "score")]
            #[serde(default)]
            pub(crate) min_score: Option<u8>,
            /// Inclusive upper score bound.
            #[arg(long, value_name = "score")]
            #[serde(default)]
            pub(crate) max_score: Option<u8>,
            /// Only keep sites in this policy zone.
            #[arg(long, value_name = "zone")]
            #[serde(default)]
            pub(crate) policy_zone: Option<String>,
            /// Only keep sites with existing infrastructure.
            #[arg(long, num_args = 0..=1, default_missing_value = "true", value_name = "bool")]
            #[serde(default)]
            pub(crate) require_infrastructure: Option<bool>,
            /// Case-insensitive text matched against site name or region.
            #[arg(long, value_name = "text")]
            #[serde(default)]
            pub(crate) search: Option<String>,
            $($fields)*
        }

        impl $name {
            /// Resolve the weight overrides and filter flags.
            pub(crate) fn scoring(&self) -> Result<$crate::ScoringConfig, $crate::CliError> {
                let update = ::siting_core::WeightUpdate {
                    solar: self.solar,
                    wind: self.wind,
                    water: self.water,
                    industry_proximity: self.industry_proximity,
                    grid_proximity: self.grid_proximity,
                    land_availability: self.land_availability,
                };
                let fields = $crate::FilterFields {
                    region: self.region.clone(),
                    min_score: self.min_score,
                    max_score: self.max_score,
                    policy_zone: self.policy_zone.clone(),
                    require_infrastructure: self.require_infrastructure,
                    search: self.search.clone(),
                };
                $crate::ScoringConfig::resolve(&update, fields)
            }
        }
    };
}
