use crate::algebra::{MatrixSettings, SparseColMatrix};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::io::{self, Read, Write};

// The declared universes plus the entry store in insertion order.
// Views are not written; they are rebuilt by replaying the entries.

#[derive(Serialize, Deserialize)]
#[serde(bound = "T: Serialize + DeserializeOwned")]
struct JsonMatrixData<T> {
    pub rows: Vec<usize>,
    pub cols: Vec<usize>,
    pub entries: Vec<(usize, usize, T)>,
    pub settings: MatrixSettings,
}

impl<T> SparseColMatrix<T>
where
    T: Clone + Serialize + DeserializeOwned,
{
    /// Write the matrix to `writer` as JSON.
    pub fn save_to_file<W: Write>(&self, writer: &mut W) -> Result<(), io::Error> {
        let json_data = JsonMatrixData {
            rows: self.rows.iter().copied().collect(),
            cols: self.cols.iter().copied().collect(),
            entries: self
                .iter()
                .map(|((row, col), v)| (row, col, v.clone()))
                .collect(),
            settings: self.settings.clone(),
        };

        let json = serde_json::to_string(&json_data)?;
        writer.write_all(json.as_bytes())?;

        Ok(())
    }

    /// Read a matrix previously written by [`save_to_file`](Self::save_to_file).
    ///
    /// If `settings` is provided it replaces the settings stored in the file.
    /// Entries are replayed in their original insertion order, so the
    /// loaded matrix exports exactly as the saved one did.
    pub fn load_from_file<R: Read>(
        reader: &mut R,
        settings: Option<MatrixSettings>,
    ) -> Result<Self, io::Error> {
        let mut buffer = String::new();
        reader.read_to_string(&mut buffer)?;
        let json_data: JsonMatrixData<T> = serde_json::from_str(&buffer)?;

        let settings = settings.unwrap_or(json_data.settings);
        let mut matrix = Self::with_settings(&json_data.rows, &json_data.cols, settings)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        for (row, col, value) in json_data.entries {
            matrix.add_unchecked(row, col, value);
        }

        Ok(matrix)
    }
}

#[test]
fn test_json_io() {
    use crate::algebra::Membership;
    use std::io::{Seek, SeekFrom};

    let mut A = SparseColMatrix::new(&[0, 1, 2], &[7, 8]).unwrap();
    A.add(2, 8, 1.5, Membership::RowsAndCols).unwrap();
    A.add(0, 8, -2.0, Membership::RowsAndCols).unwrap();
    A.add_unchecked(9, 7, 4.0);

    let mut file = tempfile::tempfile().unwrap();
    A.save_to_file(&mut file).unwrap();

    file.seek(SeekFrom::Start(0)).unwrap();
    let B = SparseColMatrix::<f64>::load_from_file(&mut file, None).unwrap();

    assert_eq!(A.to_column_arrays(), B.to_column_arrays());
    assert_eq!(A.row_order(), B.row_order());
    assert_eq!(B.settings, A.settings);
}
