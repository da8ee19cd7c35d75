use clap::Parser;
use strictmode::{
    PolicyController,
    cli::{Args, ConfigLoader, Relax},
    error::StrictModeError,
};

fn main() -> Result<(), StrictModeError> {
    env_logger::init();

    let args = Args::parse();
    let controller = PolicyController::global();

    if args.disable {
        controller.disable();
    } else {
        let config = ConfigLoader::load(&args)?;
        println!("config: {config:?}");
        controller.enable(config);
    }

    match controller.current_policies() {
        Some(active) => println!("{active}"),
        None => println!("policies unavailable"),
    }
    println!("enabled: {}", controller.is_enabled());

    if let Some(relax) = args.relax {
        let report = || match controller.current_policies() {
            Some(active) => active.to_string(),
            None => "policies unavailable".to_string(),
        };
        let inside = match relax {
            Relax::Disk => controller.with_relaxed_disk_access(report),
            Relax::Network => controller.with_relaxed_network_access(report),
            Relax::All => controller.with_all_relaxed(report),
        };
        println!("inside relaxed scope ({relax:?}):\n{inside}");
        println!("restored: {}", controller.is_enabled());
    }

    Ok(())
}
