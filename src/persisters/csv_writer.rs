use csv::Writer;

use crate::catalog::catalog::Catalog;
use crate::model::movie::Movie;

pub struct CsvWriter {}

impl CsvWriter {
    /// Dumps the catalog to a CSV file, one row per movie in catalog order.
    pub fn save_catalog_to_csv(catalog: &Catalog, file_name: &str) -> Result<(), String> {
        let mut wrt = Writer::from_path(file_name).map_err(|e| {
            format!("Could not create CSV Writer for file {}. {:?}", file_name, e)
        })?;

        if let Err(e) = wrt.write_record(&Movie::csv_titles()) {
            return Err(format!(
                "Error when adding header to Csv file {}. {:?}",
                file_name, e
            ));
        }

        for movie in catalog.movies() {
            if let Err(e) = wrt.write_record(movie.to_csvable_array()) {
                return Err(format!(
                    "Error when adding entry to Csv file {}. Entry: {:?}, Error:{:?}",
                    file_name, movie, e
                ));
            }
        }

        if let Err(e) = wrt.flush() {
            return Err(format!("Error when flushing file {}. {:?}", file_name, e));
        }

        log::info!("Saved catalog snapshot to {}", file_name);
        Ok(())
    }
}
