use std::error::Error;

use serde::{Deserialize, Serialize};

use crate::{BlobStorageProvider, EmissionResult, TripInput, VehicleKind};

/// A snapshot of a computed commute, as exported to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub start_address: String,
    pub end_address: String,
    /// distance of one trip in km
    pub distance: f64,
    pub vehicle: VehicleKind,
    pub frequency: u32,
    pub total_co2_kg: f64,
    pub per_trip_co2_kg: f64,
    pub per_km_co2_g: f64,
    pub trees_needed: u64,
    pub car_equivalent_km: f64,
    pub flight_equivalent_km: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: time::OffsetDateTime,
}

impl ExportRecord {
    pub fn new(
        start_address: &str,
        end_address: &str,
        input: &TripInput,
        result: &EmissionResult,
        timestamp: time::OffsetDateTime,
    ) -> Self {
        Self {
            start_address: start_address.to_string(),
            end_address: end_address.to_string(),
            distance: input.distance,
            vehicle: input.vehicle,
            frequency: input.frequency,
            total_co2_kg: result.total_kg,
            per_trip_co2_kg: result.per_trip_kg,
            per_km_co2_g: result.per_km_grams,
            trees_needed: result.trees_needed,
            car_equivalent_km: result.car_equivalent_km,
            flight_equivalent_km: result.flight_equivalent_km,
            timestamp,
        }
    }

    /// Pretty-printed JSON of this record
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// The name of the exported file, `co2-calc-{unix millis}.json`
    pub fn file_name(&self) -> String {
        let millis = self.timestamp.unix_timestamp_nanos() / 1_000_000;
        format!("co2-calc-{millis}.json")
    }
}

/// Writes `record` as JSON to the blob [`ExportRecord::file_name`] inside `directory`.
/// Returns the name of the written blob.
/// # Error
/// Errors if the record cannot be serialized or `provider` fails to write it
pub async fn write(
    record: &ExportRecord,
    directory: &str,
    provider: &dyn BlobStorageProvider,
) -> Result<String, Box<dyn Error>> {
    let contents = record.to_json()?;
    let blob_name = match directory.trim_end_matches('/') {
        "" => record.file_name(),
        directory => format!("{directory}/{}", record.file_name()),
    };
    provider.put(&blob_name, contents.into_bytes()).await?;
    log::info!("Results exported to {blob_name}");
    Ok(blob_name)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{compute_emission, EmissionFactorTable, EquivalentConstants, LocalDisk};
    use time::macros::datetime;

    fn record() -> ExportRecord {
        let input = TripInput {
            distance: 2.5,
            vehicle: VehicleKind::Car,
            frequency: 22,
        };
        let result = compute_emission(
            &input,
            &EmissionFactorTable::default(),
            &EquivalentConstants::default(),
        )
        .unwrap();
        ExportRecord::new(
            "Av. Paulista, 1000, São Paulo, SP",
            "Rua Oscar Freire, São Paulo, SP",
            &input,
            &result,
            datetime!(2023-10-19 12:30:00 UTC),
        )
    }

    #[test]
    fn json_fields() {
        let json = record().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["vehicle"], "car");
        assert_eq!(value["frequency"], 22);
        assert_eq!(value["distance"], 2.5);
        assert_eq!(value["trees_needed"], 1);
        assert_eq!(value["per_km_co2_g"], 192.0);
        assert_eq!(value["timestamp"], "2023-10-19T12:30:00Z");
        assert_eq!(value.as_object().unwrap().len(), 12);
    }

    #[test]
    fn file_name() {
        assert_eq!(record().file_name(), "co2-calc-1697718600000.json");
    }

    #[derive(Default)]
    struct Memory(std::sync::Mutex<std::collections::HashMap<String, Vec<u8>>>);

    #[async_trait::async_trait]
    impl BlobStorageProvider for Memory {
        async fn maybe_get(&self, blob_name: &str) -> Result<Option<Vec<u8>>, std::io::Error> {
            Ok(self.0.lock().unwrap().get(blob_name).cloned())
        }

        async fn put(&self, blob_name: &str, contents: Vec<u8>) -> Result<(), std::io::Error> {
            self.0.lock().unwrap().insert(blob_name.to_string(), contents);
            Ok(())
        }
    }

    #[tokio::test]
    async fn writes_blob() {
        let provider = Memory::default();
        let record = record();

        let name = write(&record, "exports/", &provider).await.unwrap();
        assert_eq!(name, "exports/co2-calc-1697718600000.json");
        let contents = provider.maybe_get(&name).await.unwrap().unwrap();
        assert_eq!(contents, record.to_json().unwrap().into_bytes());

        let name = write(&record, "", &provider).await.unwrap();
        assert_eq!(name, "co2-calc-1697718600000.json");
    }

    #[tokio::test]
    async fn writes_to_disk() {
        let nanos = time::OffsetDateTime::now_utc().unix_timestamp_nanos();
        let directory = std::env::temp_dir()
            .join(format!("co2calc-export-{}-{nanos}", std::process::id()));
        let directory = directory.to_str().unwrap();
        let record = record();

        let name = write(&record, directory, &LocalDisk).await.unwrap();
        assert_eq!(
            LocalDisk.maybe_get(&name).await.unwrap(),
            Some(record.to_json().unwrap().into_bytes())
        );
        std::fs::remove_dir_all(directory).unwrap();
    }
}
