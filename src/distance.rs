use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use serde::Deserialize;

use crate::Error;

/// An object that knows the travel distance between two addresses.
#[async_trait]
pub trait DistanceProvider {
    /// Returns the distance from `origin` to `destination` in meters
    async fn distance_m(&self, origin: &str, destination: &str) -> Result<f64, Error>;
}

/// Returns the distance from `origin` to `destination` in km, as reported by `provider`.
/// # Error
/// Errors with [`Error::DistanceLookupFailed`] if an address is blank, the provider fails,
/// or the provider returns a distance that is not positive
pub async fn lookup_distance_km(
    provider: &dyn DistanceProvider,
    origin: &str,
    destination: &str,
) -> Result<f64, Error> {
    let (origin, destination) = (origin.trim(), destination.trim());
    if origin.is_empty() || destination.is_empty() {
        return Err(Error::DistanceLookupFailed(
            "both addresses are required".to_string(),
        ));
    }
    log::info!("Distance from \"{origin}\" to \"{destination}\"");

    let meters = provider.distance_m(origin, destination).await?;
    if !(meters.is_finite() && meters > 0.0) {
        return Err(Error::DistanceLookupFailed(format!(
            "invalid distance of {meters} m"
        )));
    }
    let km = meters / 1000.0;
    log::info!("Distance: {km:.2} km");
    Ok(km)
}

/// Returns the great-circle distance between two (latitude, longitude) points in km
pub fn great_circle_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    let from = geoutils::Location::new(from.0, from.1);
    let to = geoutils::Location::new(to.0, to.1);
    from.haversine_distance_to(&to).meters() / 1000.0
}

static DISTANCE_MATRIX_URL: &str = "https://maps.googleapis.com/maps/api/distancematrix/json";

#[derive(Debug, Deserialize)]
struct Value {
    value: f64,
}

#[derive(Debug, Deserialize)]
struct Element {
    status: String,
    distance: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct Row {
    elements: Vec<Element>,
}

#[derive(Debug, Deserialize)]
struct DistanceMatrix {
    status: String,
    #[serde(default)]
    rows: Vec<Row>,
    error_message: Option<String>,
}

impl DistanceMatrix {
    /// The driving distance of the first origin to the first destination
    fn first_distance_m(self) -> Result<f64, Error> {
        if self.status != "OK" {
            let reason = match self.error_message {
                Some(message) => format!("{}: {message}", self.status),
                None => self.status,
            };
            return Err(Error::DistanceLookupFailed(reason));
        }
        let element = self
            .rows
            .into_iter()
            .next()
            .and_then(|row| row.elements.into_iter().next())
            .ok_or_else(|| Error::DistanceLookupFailed("empty response".to_string()))?;
        if element.status != "OK" {
            return Err(Error::DistanceLookupFailed(element.status));
        }
        element
            .distance
            .map(|distance| distance.value)
            .ok_or_else(|| Error::DistanceLookupFailed("response without distance".to_string()))
    }
}

fn lookup_err(error: impl std::fmt::Display) -> Error {
    Error::DistanceLookupFailed(error.to_string())
}

/// A [`DistanceProvider`] backed by the Google Maps Distance Matrix API (driving, metric).
pub struct GoogleDistanceMatrix {
    api_key: String,
    language: String,
    client: ClientWithMiddleware,
}

impl GoogleDistanceMatrix {
    pub fn new(api_key: String) -> Self {
        // Retry up to 3 times with increasing intervals between attempts.
        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(3);
        let client = ClientBuilder::new(reqwest::Client::new())
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();
        Self {
            api_key,
            language: "en".to_string(),
            client,
        }
    }

    /// Sets the language of the addresses (e.g. `pt-BR`)
    pub fn with_language(mut self, language: String) -> Self {
        self.language = language;
        self
    }
}

#[async_trait]
impl DistanceProvider for GoogleDistanceMatrix {
    async fn distance_m(&self, origin: &str, destination: &str) -> Result<f64, Error> {
        let response = self
            .client
            .get(DISTANCE_MATRIX_URL)
            .query(&[
                ("origins", origin),
                ("destinations", destination),
                ("mode", "driving"),
                ("units", "metric"),
                ("language", self.language.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(lookup_err)?;
        if response.status() != StatusCode::OK {
            return Err(Error::DistanceLookupFailed(format!(
                "status code {}",
                response.status()
            )));
        }
        response
            .json::<DistanceMatrix>()
            .await
            .map_err(lookup_err)?
            .first_distance_m()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    struct Fixed(Result<f64, Error>);

    #[async_trait]
    impl DistanceProvider for Fixed {
        async fn distance_m(&self, _: &str, _: &str) -> Result<f64, Error> {
            self.0.clone()
        }
    }

    #[tokio::test]
    async fn converts_to_km() {
        let km = lookup_distance_km(&Fixed(Ok(15500.0)), "Av. Paulista", "Faria Lima").await;
        assert_eq!(km, Ok(15.5));
    }

    #[tokio::test]
    async fn failures() {
        let failed = Fixed(Err(Error::DistanceLookupFailed("NOT_FOUND".to_string())));
        assert_eq!(
            lookup_distance_km(&failed, "a", "b").await,
            Err(Error::DistanceLookupFailed("NOT_FOUND".to_string()))
        );

        let zero = Fixed(Ok(0.0));
        assert!(matches!(
            lookup_distance_km(&zero, "a", "b").await,
            Err(Error::DistanceLookupFailed(_))
        ));

        let ok = Fixed(Ok(1000.0));
        assert!(matches!(
            lookup_distance_km(&ok, "  ", "b").await,
            Err(Error::DistanceLookupFailed(_))
        ));
    }

    #[test]
    fn parse_distance_matrix() {
        let ok = r#"{
            "status": "OK",
            "rows": [{"elements": [{"status": "OK", "distance": {"value": 2534, "text": "2.5 km"}}]}]
        }"#;
        let matrix: DistanceMatrix = serde_json::from_str(ok).unwrap();
        assert_eq!(matrix.first_distance_m(), Ok(2534.0));

        let not_found = r#"{"status": "OK", "rows": [{"elements": [{"status": "NOT_FOUND"}]}]}"#;
        let matrix: DistanceMatrix = serde_json::from_str(not_found).unwrap();
        assert_eq!(
            matrix.first_distance_m(),
            Err(Error::DistanceLookupFailed("NOT_FOUND".to_string()))
        );

        let denied = r#"{"status": "REQUEST_DENIED", "error_message": "invalid key"}"#;
        let matrix: DistanceMatrix = serde_json::from_str(denied).unwrap();
        assert_eq!(
            matrix.first_distance_m(),
            Err(Error::DistanceLookupFailed(
                "REQUEST_DENIED: invalid key".to_string()
            ))
        );
    }

    #[test]
    fn great_circle() {
        // Berlin BER -> Brussels BRU is ca. 650 km as the crow flies
        let km = great_circle_km((52.3650, 13.5010), (50.9008, 4.4865));
        assert!((km - 650.0).abs() < 50.0);
    }
}
