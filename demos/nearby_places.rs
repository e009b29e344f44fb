//! Nearby Places
//!
//! Ranks points of interest by approximate distance from an origin. The
//! planar approximation is accurate within a city; do not use it for
//! continental distances.
//!
//! ```bash
//! cargo run --example nearby_places
//! ```

use simetra::geo::{approx_distance_km, approx_distance_km_radians, Coord};

fn main() {
    let origin = Coord::new(37.765492, -122.431229);

    let mut places = vec![
        ("Blackbird Bar", Coord::new(37.767487, -122.429633)),
        ("Mad Dog in the Fog", Coord::new(37.772528, -122.431030)),
        ("Spin City Coffee", Coord::new(37.749287, -122.429181)),
        ("Civic Center BART", Coord::new(37.780396, -122.414135)),
    ];

    places.sort_by(|(_, a), (_, b)| {
        approx_distance_km(origin, *a).total_cmp(&approx_distance_km(origin, *b))
    });

    println!("{:<20} {:>9} {:>9}", "", "km", "km (rad)");
    for (name, coord) in places {
        println!(
            "{:<20} {:>9.2} {:>9.2}",
            name,
            approx_distance_km(origin, coord),
            approx_distance_km_radians(origin, coord)
        );
    }
}
