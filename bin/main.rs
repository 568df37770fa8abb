mod geweke;
mod opt;
mod routes;

use clap::Parser;
use opt::Opt;

fn route_cmd(opt: Opt) -> i32 {
    match opt {
        Opt::Mh(cmd) => routes::mh(cmd),
        Opt::Gibbs(cmd) => routes::gibbs(cmd),
        Opt::Geweke(cmd) => geweke::geweke(cmd),
    }
}

fn main() {
    env_logger::init();

    let opt = Opt::parse();

    let exit_code = route_cmd(opt);

    std::process::exit(exit_code);
}
