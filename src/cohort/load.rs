use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::info;

use crate::cohort::error::CohortErr;
use crate::cohort::types::TrialRecord;
use crate::error::ImmunostatErr;

/// Reads the cell-count table (header row, one sample per row). Empty
/// cells become missing values and unknown columns are ignored.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<TrialRecord>, ImmunostatErr> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| -> ImmunostatErr {
        CohortErr::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        }
        .into()
    })?;

    let records = read_records(file)?;
    if records.is_empty() {
        return Err(CohortErr::NoRecords(path.display().to_string()).into());
    }
    info!(path = %path.display(), n = records.len(), "loaded records");
    Ok(records)
}

pub fn read_records<R: Read>(reader: R) -> Result<Vec<TrialRecord>, ImmunostatErr> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    reader
        .deserialize::<TrialRecord>()
        .map(|row| {
            row.map_err(|e| -> ImmunostatErr {
                let line = e.position().map(|p| p.line()).unwrap_or(0);
                CohortErr::Csv {
                    line,
                    message: e.to_string(),
                }
                .into()
            })
        })
        .collect::<Result<Vec<TrialRecord>, ImmunostatErr>>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cohort::types::{Condition, Response, SampleType, Sex, Treatment};
    use std::io::Write;

    const TABLE: &str = "\
project,subject,condition,age,sex,treatment,response,sample,sample_type,time_from_treatment_start,b_cell,cd8_t_cell,cd4_t_cell,nk_cell,monocyte
prj1,sbj1,melanoma,57,M,miraclib,yes,s1,PBMC,0,36000,24000,42000,6000,12000
prj1,sbj2,healthy,,F,none,,s2,WB,,10,20,30,40,50
";

    #[test]
    fn reads_full_and_sparse_rows() {
        let records = read_records(TABLE.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);

        let first = &records[0];
        assert_eq!(first.sample, "s1");
        assert_eq!(first.condition, Some(Condition::Melanoma));
        assert_eq!(first.sex, Some(Sex::M));
        assert_eq!(first.treatment, Some(Treatment::Miraclib));
        assert_eq!(first.response, Some(Response::Yes));
        assert_eq!(first.sample_type, Some(SampleType::Pbmc));
        assert_eq!(first.monocyte, Some(12000));
        assert_eq!(first.total_cell_count(), 120000);

        let second = &records[1];
        assert_eq!(second.age, None);
        assert_eq!(second.response, None);
        assert_eq!(second.treatment, Some(Treatment::Untreated));
        assert_eq!(second.time_from_treatment_start, None);
    }

    #[test]
    fn bad_value_reports_line() {
        let table = "sample,condition,b_cell\ns1,melanoma,12\ns2,sarcoma,3\n";
        if let Err(e) = read_records(table.as_bytes()) {
            assert!(format!("{}", e).starts_with("while loading cohort: bad record at line 3"));
        } else {
            panic!()
        }
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TABLE.as_bytes()).unwrap();
        let records = load_records(file.path()).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn header_only_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"sample,b_cell\n").unwrap();
        if let Err(ImmunostatErr::Cohort(CohortErr::NoRecords(_))) = load_records(file.path()) {
        } else {
            panic!()
        }
    }

    #[test]
    fn missing_file() {
        if let Err(e) = load_records("/definitely/not/here.csv") {
            assert!(format!("{}", e).starts_with("while loading cohort: could not open"));
        } else {
            panic!()
        }
    }
}
