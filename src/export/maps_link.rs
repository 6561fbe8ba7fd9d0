//! Google Maps directions link for a plan

use crate::TripAiError;
use crate::models::{RoutePoint, TripPlan};

const DIRECTIONS_BASE: &str = "https://www.google.com/maps/dir/?api=1";

fn coordinates(point: &RoutePoint) -> String {
    format!("{},{}", point.lat, point.lng)
}

/// Directions URL through every waypoint of `plan`, in order.
///
/// The traced route's end points are used for origin and destination when the
/// plan has one, since they are more precise than the waypoint names.
pub fn directions_url(plan: &TripPlan) -> crate::Result<String> {
    let (Some(first), Some(last)) = (plan.waypoints.first(), plan.waypoints.last()) else {
        return Err(TripAiError::export(
            "Not enough waypoints to generate a map link.",
        ));
    };

    let origin = plan
        .route_path
        .first()
        .map_or_else(|| urlencoding::encode(&first.location).into_owned(), coordinates);
    let destination = plan
        .route_path
        .last()
        .map_or_else(|| urlencoding::encode(&last.location).into_owned(), coordinates);

    let mut url = format!("{DIRECTIONS_BASE}&origin={origin}&destination={destination}");

    let interior = plan
        .waypoints
        .get(1..plan.waypoints.len() - 1)
        .unwrap_or_default();
    if !interior.is_empty() {
        let stops: Vec<_> = interior
            .iter()
            .map(|waypoint| urlencoding::encode(&waypoint.location))
            .collect();
        url.push_str("&waypoints=");
        url.push_str(&stops.join("|"));
    }

    url.push_str("&travelmode=driving");
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TripSummary, Waypoint};

    fn plan(locations: &[&str], route_path: Vec<RoutePoint>) -> TripPlan {
        TripPlan {
            trip_title: "Test".to_string(),
            summary: TripSummary {
                total_distance: "1 km".to_string(),
                estimated_duration: "1 minute".to_string(),
            },
            waypoints: locations
                .iter()
                .map(|location| Waypoint {
                    location: (*location).to_string(),
                    description: String::new(),
                })
                .collect(),
            route_path,
            weather_points: Vec::new(),
            traffic_advisories: Vec::new(),
            fuel_stops: Vec::new(),
            points_of_interest: Vec::new(),
            vehicle_advisories: Vec::new(),
        }
    }

    #[test]
    fn test_waypoint_names_when_no_route_path() {
        let url = directions_url(&plan(
            &["San Francisco, CA", "Monterey, CA", "Big Sur", "Los Angeles, CA"],
            Vec::new(),
        ))
        .unwrap();

        assert_eq!(
            url,
            "https://www.google.com/maps/dir/?api=1\
             &origin=San%20Francisco%2C%20CA\
             &destination=Los%20Angeles%2C%20CA\
             &waypoints=Monterey%2C%20CA|Big%20Sur\
             &travelmode=driving"
        );
    }

    #[test]
    fn test_route_path_end_points_win() {
        let url = directions_url(&plan(
            &["Munich", "Verona"],
            vec![
                RoutePoint { lat: 48.137, lng: 11.575 },
                RoutePoint { lat: 47.0, lng: 11.5 },
                RoutePoint { lat: 45.438, lng: 10.992 },
            ],
        ))
        .unwrap();

        assert_eq!(
            url,
            "https://www.google.com/maps/dir/?api=1&origin=48.137,11.575&destination=45.438,10.992&travelmode=driving"
        );
    }

    #[test]
    fn test_single_waypoint_has_no_interior_stops() {
        let url = directions_url(&plan(&["Oslo"], Vec::new())).unwrap();
        assert_eq!(
            url,
            "https://www.google.com/maps/dir/?api=1&origin=Oslo&destination=Oslo&travelmode=driving"
        );
    }

    #[test]
    fn test_no_waypoints_is_an_export_error() {
        let err = directions_url(&plan(&[], Vec::new())).unwrap_err();
        assert!(matches!(err, TripAiError::Export { .. }));
    }
}
