use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use pausepoint_core::global;

mod copy_task;
mod terminal_hook;

use copy_task::{copy_with_pause_checks, CopyError};
use terminal_hook::TerminalPauseHook;

#[derive(Parser)]
#[command(name = "pausepoint", about = "Chunked file copy with pause checkpoints")]
struct Args {
    /// File to copy
    input: PathBuf,

    /// Destination path
    output: PathBuf,

    /// Chunk size in bytes
    #[arg(short, long, default_value = "65536")]
    chunk_size: usize,

    /// Ask the copy to stop once this percentage is reached
    #[arg(short, long)]
    stop_at: Option<i32>,
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let args = Args::parse();

    // The copy never sees the hook directly: it is registered process-wide
    // and reached through global::invoke, the way a deeply nested call site
    // inside a larger library would reach it.
    let hook = TerminalPauseHook::new(args.stop_at);
    let bar = hook.bar();
    global::register(hook);

    println!("Copying {} -> {}", args.input.display(), args.output.display());
    let start = Instant::now();

    let result =
        copy_with_pause_checks(&args.input, &args.output, args.chunk_size, global::invoke).await;

    match result {
        Ok(bytes) => {
            bar.finish_with_message("done");
            println!(
                "Copied {} bytes in {:.2}s",
                bytes,
                start.elapsed().as_secs_f64()
            );
        }
        Err(e @ CopyError::Aborted { .. }) => {
            bar.abandon_with_message("stopped");
            eprintln!("Copy stopped: {}", e);
        }
        Err(e) => {
            bar.abandon_with_message("failed");
            eprintln!("Copy failed: {}", e);
        }
    }

    global::clear();
}
