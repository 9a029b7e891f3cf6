use chrono::Utc;
use shelfstats_data::DataLoader;
use shelfstats_vis::render::Render;
use shelfstats_vis::render::output::OutputFile;
use tracing::info;
use tracing::warn;

use crate::cli::PathExt;
use crate::cli::RenderArgs;
use crate::dashboard;
use crate::error::CliError;

pub(crate) fn render(args: RenderArgs) -> Result<(), CliError> {
    let output_path = args.output_path.or_current_dir()?;

    info!(
        source = %args.data,
        output = %output_path.display(),
        "rendering the dashboard"
    );

    let loader = DataLoader::new(args.data)?;
    let mut view = dashboard::build(&loader, &args.title).generated_at(Utc::now());

    if let Some(section) = args.section {
        if view.focus(&section).is_none() {
            warn!(section = %section, "the page will open at the top");
        }
    }

    let mut output = OutputFile::new(&output_path)?;
    view.render(&mut output)?;
    output.flush()?;

    info!(
        path = %output.path().display(),
        charts = view.charts().len(),
        "dashboard written"
    );

    Ok(())
}
