use simpleflake::global;

fn main() {
    // Generate some IDs with the process-wide codec
    let id1 = global::generate().unwrap();
    let id2 = global::generate().unwrap();
    let id3 = global::generate().unwrap();

    println!("Generated IDs (roughly time-ordered):");
    for id in [id1, id2, id3] {
        print_id(id);
    }

    // Or extract components individually
    let extract = global::codec().extractor();
    println!("\nComponents of ID2 (extracted individually):");
    println!("  Timestamp: {} ms since epoch", extract.relative_timestamp(id2));
    println!("  Random: {}", extract.random(id2));
}

fn print_id(id: simpleflake::SimpleflakeId) {
    let (timestamp, random) = global::decompose(id);
    let datetime = global::codec().extractor().datetime(id).unwrap();

    println!("  ID: {id}, Timestamp: {timestamp}, Human date: {datetime}, Random: {random}");
}
