// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use sortviz_cmdr::{CLIArg, FramePrinter};
use sortviz_engine::{generate_random_array, throws, CommonResult, EngineSignal,
                     SortVisualizer, VizConfig, CHANNEL_WIDTH,
                     log_support::try_initialize_logging_global};
use tokio::sync::mpsc::channel;

#[tokio::main]
async fn main() -> CommonResult<()> {
    throws!({
        let cli_arg = CLIArg::parse();

        if cli_arg.enable_logging {
            try_initialize_logging_global(tracing_core::LevelFilter::DEBUG).ok();
            // % is Display, ? is Debug.
            tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
        }

        let config = VizConfig {
            array_size: cli_arg.size,
            speed: cli_arg.speed,
            algorithm: cli_arg.try_parse_algorithm()?,
        };
        config.try_validate()?;

        print_algorithm_card(config.algorithm);

        let (signal_sender, mut signal_receiver) = channel::<EngineSignal>(CHANNEL_WIDTH);
        let mut visualizer = SortVisualizer::new(signal_sender);

        let array = generate_random_array(config.array_size);
        visualizer.start(config.algorithm, &array, config.speed);

        let mut printer = FramePrinter::new();
        while let Some(signal) = signal_receiver.recv().await {
            let is_closing = matches!(
                signal,
                EngineSignal::RunCompleted | EngineSignal::RunStopped
            );
            if let Some(line) = printer.apply(&signal) {
                println!("{line}");
            }
            if is_closing {
                break;
            }
        }
        // We don't care about the outcome here; the closing signal already told us.
        _ = visualizer.await_run().await;

        if let Some(stats) = printer.last_stats() {
            println!(
                "comparisons: {}, swaps: {}, time: {} ms",
                stats.comparisons,
                stats.swaps,
                stats.elapsed_ms()
            );
        }
    })
}

fn print_algorithm_card(algorithm: sortviz_engine::AlgorithmId) {
    let info = algorithm.info();
    let (best, average, worst) = info.time_complexity;
    println!("{}", info.name);
    println!("{}", info.description);
    println!(
        "time: best {best}, average {average}, worst {worst}; space: {}",
        info.space_complexity
    );
}
