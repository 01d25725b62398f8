//! Walkthrough of the proximity search surface

use proximity::{
    DistanceFormatter, GeoPoint, GeofenceZone, JsonFormatter, LocatedEntity, ProximitySearch,
    SearchRequest, TextFormatter, ZoneCheck,
};

fn main() {
    println!("=== Proximity Search Core - Demo ===\n");

    let entities = sample_roster();
    let reference = GeoPoint::new(25.2048, 55.2708);
    let search = ProximitySearch::new();

    demonstrate_full_ranking(&search, reference, &entities);
    demonstrate_top_k(&search, reference, &entities);
    demonstrate_json_output(&search, reference, &entities);
    demonstrate_check_in(&search);
    demonstrate_region_fitting(&search, &entities);
}

fn sample_roster() -> Vec<LocatedEntity> {
    let make = |id: &str, name: &str, lat: f64, lon: f64| LocatedEntity {
        id: id.to_string(),
        position: GeoPoint::new(lat, lon),
        display_name: name.to_string(),
        metadata: serde_json::json!({ "team": "field-ops" }),
    };

    vec![
        make("emp-01", "Dispatch Hub", 25.2048, 55.2708),
        make("emp-02", "North Site", 25.3, 55.3),
        make("emp-03", "Riyadh Office", 24.7136, 46.6753),
        make("emp-04", "Marina Kiosk", 25.08, 55.14),
        make("emp-05", "Airport Desk", 25.2532, 55.3657),
    ]
}

fn demonstrate_full_ranking(search: &ProximitySearch, reference: GeoPoint, entities: &[LocatedEntity]) {
    println!("1. Full Ranking:");
    let response = search.search(&SearchRequest::new(reference), entities);
    let text = TextFormatter::new().format_text(&response);
    for line in text.lines() {
        println!("   {}", line);
    }
    println!();
}

fn demonstrate_top_k(search: &ProximitySearch, reference: GeoPoint, entities: &[LocatedEntity]) {
    println!("2. Top 3 Nearby:");
    let request = SearchRequest::new(reference).with_limit(3);
    let response = search.search(&request, entities);

    let formatter = DistanceFormatter::new();
    for (index, ranked) in response.results.iter().enumerate() {
        println!(
            "   {}. {} at {}",
            index + 1,
            ranked.entity.display_name,
            formatter.format(ranked.distance_meters)
        );
    }
    println!();
}

fn demonstrate_json_output(search: &ProximitySearch, reference: GeoPoint, entities: &[LocatedEntity]) {
    println!("3. JSON Output (truncated):");
    let request = SearchRequest::new(reference).with_limit(1);
    let response = search.search(&request, entities);

    match JsonFormatter::pretty().format_json(&response) {
        Ok(json) => {
            for line in json.lines().take(12) {
                println!("   {}", line);
            }
            if json.lines().count() > 12 {
                println!("   ... (truncated)");
            }
        }
        Err(e) => println!("   Error: {}", e),
    }
    println!();
}

fn demonstrate_check_in(search: &ProximitySearch) {
    println!("4. Geofenced Check-In:");
    let zones = vec![
        GeofenceZone::new("hq", "Headquarters", GeoPoint::new(25.2048, 55.2708), 400.0),
        GeofenceZone::new("wh", "Warehouse", GeoPoint::new(25.12, 55.21), 250.0),
    ];

    let positions = [
        ("at the office", GeoPoint::new(25.2050, 55.2710)),
        ("across town", GeoPoint::new(25.25, 55.33)),
    ];

    let formatter = DistanceFormatter::new();
    for (label, position) in positions {
        match search.check_in(position, &zones) {
            Some((index, ZoneCheck::Inside { distance_meters })) => {
                println!(
                    "   {} -> inside '{}' ({} from center)",
                    label,
                    zones[index].name,
                    formatter.format(distance_meters)
                );
            }
            Some((index, ZoneCheck::Outside { overshoot_meters, .. })) => {
                println!(
                    "   {} -> outside, nearest zone '{}' is {} away",
                    label,
                    zones[index].name,
                    formatter.format(overshoot_meters)
                );
            }
            None => println!("   {} -> no zones configured", label),
        }
    }
    println!();
}

fn demonstrate_region_fitting(search: &ProximitySearch, entities: &[LocatedEntity]) {
    println!("5. Map Region Fitting:");
    match search.fit_region(entities) {
        Some(region) => {
            println!(
                "   Center: {:.6}, {:.6}",
                region.center.latitude, region.center.longitude
            );
            println!(
                "   Span:   {:.0} m east x {:.0} m north",
                region.east_span_meters, region.north_span_meters
            );
        }
        None => println!("   No markers to fit"),
    }
}
