use std::io;
use std::io::Write;

use shelfstats_data::DataLoader;
use shelfstats_data::Fetch;
use shelfstats_vis::builders::Visualization;

use crate::cli::SummaryArgs;
use crate::dashboard;
use crate::error::CliError;

pub(crate) fn summary(args: SummaryArgs) -> Result<(), CliError> {
    let loader = DataLoader::new(args.data)?;

    let mut stdout = io::stdout().lock();
    write_summary(&loader, &mut stdout)?;
    stdout.flush()?;

    Ok(())
}

fn write_summary<F, W>(loader: &F, out: &mut W) -> io::Result<()>
where
    F: Fetch,
    W: Write,
{
    let charts = dashboard::load_charts(loader);

    for vis in Visualization::ALL {
        let Some(chart) = charts.get(&vis) else {
            writeln!(out, "{} (unavailable)\n", vis.title())?;
            continue;
        };

        writeln!(out, "{}", vis.title())?;

        let rows = chart.config().rows();
        let width = rows.iter().map(|row| row.label.chars().count()).max().unwrap_or(0);
        for row in rows {
            writeln!(out, "  {:<width$}  {}", row.label, row.value)?;
        }

        writeln!(out)?;
    }

    Ok(())
}
