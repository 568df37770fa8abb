use bayeswalk::geweke::GewekeTester;
use bayeswalk::gibbs::geweke::{GibbsGewekeModel, GibbsGewekeSettings};
use log::info;

use crate::opt::GewekeArgs;

pub fn geweke(cmd: GewekeArgs) -> i32 {
    let defaults = GibbsGewekeSettings::default();
    let settings =
        match GibbsGewekeSettings::new(cmd.n_obs, *defaults.prior()) {
            Ok(settings) => settings,
            Err(err) => {
                eprintln!("Invalid Geweke settings: {err}");
                return 1;
            }
        };

    info!(
        "Running Gibbs Geweke test: {} iterations, lag {}, {} observations",
        cmd.n_iters, cmd.lag, cmd.n_obs
    );

    let mut rng = cmd.rng();
    let mut tester = GewekeTester::<GibbsGewekeModel>::new(settings);
    tester.set_verbose(true);
    tester.run(cmd.n_iters, Some(cmd.lag as usize), &mut rng);

    if let Some(path) = cmd.output.as_ref() {
        if let Err(err) = tester.save(path) {
            eprintln!("Could not save Geweke result: {err}");
            return 1;
        }
    }
    0
}
