use thiserror::Error;

use crate::Context;

const ENDPOINT: &str = "https://maps.googleapis.com/maps/api/geocode/json";

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("unexpected geocoding status: {0}")]
    Status(String)
}

///
/// Client for the geocoding HTTP API. Lookups are restricted to the
/// country carried by the Context; absence of a result is the Ok(None)
/// signal, not an error.
///
pub struct Geocoder {
    client: reqwest::blocking::Client,
    key: String
}

#[derive(Deserialize, Debug)]
struct GeocodeBody {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>
}

#[derive(Deserialize, Debug)]
struct GeocodeResult {
    geometry: Geometry
}

#[derive(Deserialize, Debug)]
struct Geometry {
    location: Coordinates
}

#[derive(Deserialize, Debug)]
struct Coordinates {
    lat: f64,
    lng: f64
}

impl Geocoder {
    pub fn new(key: String) -> Self {
        Geocoder {
            client: reqwest::blocking::Client::new(),
            key: key
        }
    }

    pub fn lookup(&self, address: &String, context: &Context) -> Result<Option<(f64, f64)>, GeocodeError> {
        let components = format!("country:{}", context.country);

        let body: GeocodeBody = self.client
            .get(ENDPOINT)
            .query(&[
                ("address", address.as_str()),
                ("key", self.key.as_str()),
                ("components", components.as_str())
            ])
            .send()?
            .error_for_status()?
            .json()?;

        parse(body)
    }
}

fn parse(body: GeocodeBody) -> Result<Option<(f64, f64)>, GeocodeError> {
    match body.status.as_str() {
        "OK" => match body.results.first() {
            Some(result) => Ok(Some((result.geometry.location.lat, result.geometry.location.lng))),
            None => Ok(None)
        },
        "ZERO_RESULTS" => Ok(None),
        status => Err(GeocodeError::Status(String::from(status)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_located() {
        let body: GeocodeBody = serde_json::from_value(json!({
            "status": "OK",
            "results": [{
                "geometry": {
                    "location": { "lat": 4.60971, "lng": -74.08175 }
                }
            }]
        })).unwrap();

        assert_eq!(parse(body).unwrap(), Some((4.60971, -74.08175)));
    }

    #[test]
    fn test_parse_absent() {
        let body: GeocodeBody = serde_json::from_value(json!({
            "status": "ZERO_RESULTS",
            "results": []
        })).unwrap();
        assert_eq!(parse(body).unwrap(), None);

        // OK with no results is treated as absence as well
        let body: GeocodeBody = serde_json::from_value(json!({
            "status": "OK"
        })).unwrap();
        assert_eq!(parse(body).unwrap(), None);
    }

    #[test]
    fn test_parse_failure() {
        let body: GeocodeBody = serde_json::from_value(json!({
            "status": "REQUEST_DENIED"
        })).unwrap();

        match parse(body) {
            Err(GeocodeError::Status(status)) => assert_eq!(status, String::from("REQUEST_DENIED")),
            _ => panic!("expected Status error")
        };
    }
}
