use std::collections::BTreeMap;

use bayeswalk_geweke::{GewekeModel, GewekeResampleData, GewekeSummarize};
use bayeswalk_stats::conditional::{draw_mu, draw_sig2};
use bayeswalk_stats::suffstat;
use bayeswalk_utils::sum_sq_dev;
use rand::Rng;
use rand_distr::StandardNormal;
use serde::{de, Deserialize, Deserializer, Serialize};

use super::GibbsState;
use crate::config::GibbsPrior;
use crate::error::Error;

const INVALID_PRIOR: &str = "prior validated by GibbsGewekeSettings::new";

/// Settings for the Geweke test of the Gibbs transition.
///
/// # Notes
///
/// Deserialization goes through [`GibbsGewekeSettings::new`], so an invalid
/// prior is rejected when the settings are read.
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct GibbsGewekeSettings {
    n_obs: usize,
    prior: GibbsPrior,
}

impl<'de> Deserialize<'de> for GibbsGewekeSettings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(deny_unknown_fields)]
        struct Raw {
            n_obs: usize,
            prior: GibbsPrior,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.n_obs, raw.prior).map_err(de::Error::custom)
    }
}

impl Default for GibbsGewekeSettings {
    fn default() -> Self {
        Self {
            n_obs: 5,
            prior: GibbsPrior::new(0.0, 1.0, 3.0, 2.0),
        }
    }
}

impl GibbsGewekeSettings {
    pub fn new(n_obs: usize, prior: GibbsPrior) -> Result<Self, Error> {
        prior.validate()?;
        Ok(Self { n_obs, prior })
    }

    pub fn n_obs(&self) -> usize {
        self.n_obs
    }

    pub fn prior(&self) -> &GibbsPrior {
        &self.prior
    }
}

/// The Gibbs chain state together with the data it conditions on
#[derive(Clone, Debug)]
pub struct GibbsGewekeModel {
    state: GibbsState,
    ys: Vec<f64>,
}

impl GewekeResampleData for GibbsGewekeModel {
    type Settings = GibbsGewekeSettings;

    fn geweke_resample_data(
        &mut self,
        settings: Option<&GibbsGewekeSettings>,
        rng: &mut impl Rng,
    ) {
        let n_obs = settings.map_or(self.ys.len(), |s| s.n_obs);
        let sigma = self.state.sig2.sqrt();
        let mu = self.state.mu;
        self.ys = (0..n_obs)
            .map(|_| {
                let z: f64 = rng.sample(StandardNormal);
                sigma.mul_add(z, mu)
            })
            .collect();
    }
}

impl GewekeSummarize for GibbsGewekeModel {
    fn geweke_summarize(
        &self,
        _settings: &GibbsGewekeSettings,
    ) -> BTreeMap<String, f64> {
        let ybar = suffstat::ybar(&self.ys);
        let mut summary = BTreeMap::new();
        summary.insert(String::from("mu"), self.state.mu);
        summary.insert(String::from("sig2"), self.state.sig2);
        summary.insert(String::from("y_mean"), ybar);
        summary.insert(
            String::from("y_sum_sq"),
            sum_sq_dev(&self.ys, ybar),
        );
        summary
    }
}

impl GewekeModel for GibbsGewekeModel {
    fn geweke_from_prior(
        settings: &GibbsGewekeSettings,
        rng: &mut impl Rng,
    ) -> Self {
        let prior = &settings.prior;
        // With no data the full conditionals are the priors
        let sig2 = draw_sig2(&[], 0.0, &prior.sig2_prior(), rng)
            .expect(INVALID_PRIOR);
        let mu = draw_mu(0, 0.0, sig2, &prior.mu_prior(), rng);

        GibbsGewekeModel {
            state: GibbsState { mu, sig2 },
            ys: Vec::new(),
        }
    }

    fn geweke_step(
        &mut self,
        settings: &GibbsGewekeSettings,
        rng: &mut impl Rng,
    ) {
        let ybar = suffstat::ybar(&self.ys);
        self.state
            .step(&self.ys, ybar, &settings.prior, rng)
            .expect(INVALID_PRIOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256Plus;

    #[test]
    fn settings_reject_invalid_prior() {
        let res =
            GibbsGewekeSettings::new(5, GibbsPrior::new(0.0, 1.0, 1.0, -2.0));
        assert!(res.is_err());
    }

    #[test]
    fn deserialize_valid_settings() {
        let yaml = indoc!(
            "
            n_obs: 7
            prior:
              mu_0: 0.5
              sig2_0: 2.0
              nu_0: 3.0
              beta_0: 1.5
            "
        );
        let settings: GibbsGewekeSettings = serde_yaml::from_str(yaml).unwrap();
        let expected =
            GibbsGewekeSettings::new(7, GibbsPrior::new(0.5, 2.0, 3.0, 1.5))
                .unwrap();
        assert_eq!(settings, expected);
    }

    #[test]
    fn deserialize_rejects_invalid_prior() {
        let yaml = indoc!(
            "
            n_obs: 5
            prior:
              mu_0: 0.0
              sig2_0: 1.0
              nu_0: -1.0
              beta_0: 2.0
            "
        );
        let res: Result<GibbsGewekeSettings, _> = serde_yaml::from_str(yaml);
        let err = res.unwrap_err();
        assert!(err.to_string().contains("nu_0"), "{err}");
    }

    #[test]
    fn serialized_settings_read_back() {
        let settings = GibbsGewekeSettings::default();
        let yaml = serde_yaml::to_string(&settings).unwrap();
        let read: GibbsGewekeSettings = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(read, settings);
    }

    #[test]
    fn resample_data_draws_n_obs_points() {
        let mut rng = Xoshiro256Plus::seed_from_u64(1);
        let settings = GibbsGewekeSettings::default();
        let mut model = GibbsGewekeModel::geweke_from_prior(&settings, &mut rng);
        assert!(model.ys.is_empty());

        model.geweke_resample_data(Some(&settings), &mut rng);
        assert_eq!(model.ys.len(), settings.n_obs());
        assert!(model.state.sig2 > 0.0);
    }

    #[test]
    fn summary_has_parameters_and_data_statistics() {
        let mut rng = Xoshiro256Plus::seed_from_u64(2);
        let settings = GibbsGewekeSettings::default();
        let mut model = GibbsGewekeModel::geweke_from_prior(&settings, &mut rng);
        model.geweke_resample_data(Some(&settings), &mut rng);
        model.geweke_step(&settings, &mut rng);

        let summary = model.geweke_summarize(&settings);
        let keys: Vec<&str> = summary.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["mu", "sig2", "y_mean", "y_sum_sq"]);
    }
}
