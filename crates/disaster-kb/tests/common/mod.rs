use std::path::{Path, PathBuf};

pub const HEADER: &str =
    "disasterNumber,state,declarationType,incidentType,iaProgramDeclared,paProgramDeclared";

/// One CSV row: region, incident type, IA flag, PA flag
pub type Row<'a> = (&'a str, &'a str, &'a str, &'a str);

pub fn write_csv(dir: &Path, rows: &[Row]) -> PathBuf {
    let mut content = String::from(HEADER);
    content.push('\n');
    for (i, (region, incident, ia, pa)) in rows.iter().enumerate() {
        content.push_str(&format!("{},{},DR,{},{},{}\n", 1000 + i, region, incident, ia, pa));
    }
    let path = dir.join("DisasterDeclarationsSummaries.csv");
    std::fs::write(&path, content).unwrap();
    path
}

pub fn repeat<'a>(row: Row<'a>, n: usize) -> Vec<Row<'a>> {
    vec![row; n]
}
