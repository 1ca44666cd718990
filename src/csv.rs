/// Deserializes comma-separated `data` with a header row into records of `D`.
pub fn deserialize<'a, D: serde::de::DeserializeOwned + 'a>(
    data: &'a [u8],
) -> impl Iterator<Item = Result<D, csv::Error>> + 'a {
    let rdr = csv::ReaderBuilder::new()
        .delimiter(b',')
        .trim(csv::Trim::All)
        .from_reader(std::io::Cursor::new(data));
    rdr.into_deserialize()
}

/// Serializes `items` into comma-separated bytes with a header row.
pub fn serialize(
    items: impl Iterator<Item = impl serde::Serialize>,
) -> Result<Vec<u8>, csv::Error> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    for item in items {
        wtr.serialize(item)?
    }
    wtr.into_inner().map_err(|e| e.into_error().into())
}
