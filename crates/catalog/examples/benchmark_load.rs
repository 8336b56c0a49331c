use catalog::Catalog;
use std::path::PathBuf;
use std::time::Instant;

fn main() {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/input.json"));

    println!("Loading simulation input from {}...\n", path.display());

    let start = Instant::now();
    let (catalog, actions) = Catalog::load_from_file(&path).expect("Failed to load input");
    let elapsed = start.elapsed();

    let (videos, actors, users) = catalog.counts();
    let total_views: u32 = catalog.videos.iter().map(|video| video.views).sum();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Videos: {}", videos);
    println!("Actors: {}", actors);
    println!("Users: {}", users);
    println!("Actions: {}", actions.len());
    println!("Seeded views: {}", total_views);
}
