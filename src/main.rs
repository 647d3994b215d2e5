use fourierscope::{run_fourierscope, FourierScopeConfig};

fn main() -> eframe::Result<()> {
    run_fourierscope(FourierScopeConfig::default())
}
