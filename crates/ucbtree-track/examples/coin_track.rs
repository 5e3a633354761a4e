use std::path::PathBuf;

use serde_json::json;
use ucbtree_track::{compile_yaml, search};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("crates/ucbtree-track/examples/sample.track.yaml"));
    let episodes = args
        .next()
        .map(|raw| raw.parse::<usize>().expect("episodes must be an integer"))
        .unwrap_or(10_000);
    let seed = args
        .next()
        .map(|raw| raw.parse::<u64>().expect("seed must be an integer"))
        .unwrap_or(27);

    let track = compile_yaml(&path).expect("failed to compile track YAML");
    let run = search(&track, episodes, seed).expect("search failed");
    let line = run.principal_line().expect("principal line lookup failed");

    let summary = json!({
        "track": track.coins(),
        "moves": track.moves(),
        "exploration": run.exploration,
        "run": run.metrics,
        "optimal_score": track.optimal_score(),
        "expected_random_score": track.expected_random_score(),
        "principal_line": line,
        "principal_line_score": track.play_line(&line),
        "nodes": run.tree.node_count(),
    });

    println!(
        "{}",
        serde_json::to_string_pretty(&summary).expect("summary serializes")
    );
}
