use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::client::SnykClient;
use crate::error::{ExportError, Result};
use crate::types::Project;

const HEADER: [&str; 1] = ["Name"];

/// Write the `Name` header followed by one row per project.
pub fn write_projects<W: Write>(writer: W, projects: &[Project]) -> csv::Result<usize> {
    let mut csv = csv::Writer::from_writer(writer);

    csv.write_record(HEADER)?;
    for project in projects {
        csv.write_record([project.name.as_str()])?;
    }
    csv.flush()?;

    Ok(projects.len())
}

/// Create (or truncate) `path` and write the projects to it.
pub fn export_to_file(path: &Path, projects: &[Project]) -> Result<usize> {
    let to_write_error = |source: csv::Error| ExportError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(|e| to_write_error(e.into()))?;
    let rows = write_projects(file, projects).map_err(to_write_error)?;

    info!(path = %path.display(), rows, "wrote projects");

    Ok(rows)
}

/// Fetch the organization's projects, then export them. Nothing is written
/// unless the fetch succeeds.
pub async fn run(client: &SnykClient, org_id: &str, path: &Path) -> Result<usize> {
    let projects = client.list_projects(org_id).await?;
    export_to_file(path, &projects)
}
