#![warn(rust_2018_idioms)]

mod actor;
mod app;
mod control;
mod hand;
mod listener;
mod model;
mod util;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        error!("mode not specified (E: engine, C: calculator)");
        return;
    }

    let args2 = args[2..].to_vec();
    match args[1].as_str() {
        "E" => {
            // game engine
            app::EngineApp::new(args2).run();
        }
        "C" => {
            // hand calculator
            app::CalculatorApp::new(args2).run();
        }
        mode => {
            error!("unknown mode: {}", mode);
        }
    }
}
