use proximity::{
    load_snapshot, DistanceFormatter, GeoPoint, JsonFormatter, ProximitySearch, SearchRequest,
    TextFormatter,
};

fn print_usage(program: &str) {
    eprintln!("Usage: {} <snapshot.json> <latitude> <longitude> [limit] [--json]", program);
    eprintln!();
    eprintln!("  snapshot.json  JSON file with an \"entities\" array");
    eprintln!("  latitude       reference latitude in decimal degrees");
    eprintln!("  longitude      reference longitude in decimal degrees");
    eprintln!("  limit          optional cap on the number of results");
    eprintln!("  --json         emit the response as JSON instead of text");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program = args
        .first()
        .map_or("proximity", |s| s.as_str())
        .to_string();

    let mut json_output = false;
    let mut positional: Vec<&String> = Vec::new();
    for arg in args.iter().skip(1) {
        if arg == "--json" {
            json_output = true;
        } else {
            positional.push(arg);
        }
    }

    if positional.len() < 3 || positional.len() > 4 {
        print_usage(&program);
        return Err("Invalid arguments".into());
    }

    let snapshot_path = positional[0];
    let latitude: f64 = positional[1]
        .parse()
        .map_err(|_| format!("Invalid latitude '{}'", positional[1]))?;
    let longitude: f64 = positional[2]
        .parse()
        .map_err(|_| format!("Invalid longitude '{}'", positional[2]))?;

    let mut request = SearchRequest::new(GeoPoint::new(latitude, longitude));
    if let Some(raw) = positional.get(3) {
        let limit: usize = raw
            .parse()
            .map_err(|_| format!("Invalid limit '{}'", raw))?;
        request = request.with_limit(limit);
    }

    let entities = load_snapshot(snapshot_path)?;
    let search = ProximitySearch::new();
    let response = search.search(&request, &entities);

    if json_output {
        println!("{}", JsonFormatter::pretty().format_json(&response)?);
    } else {
        let formatter = TextFormatter::new().with_distance_formatter(DistanceFormatter::new());
        print!("{}", formatter.format_text(&response));
    }

    Ok(())
}
