use super::*;
use crate::io::PrintTarget;
use std::io::Write;

impl<T> LinearRegression<T>
where
    T: FloatT,
{
    pub(super) fn print_fit(
        &mut self,
        (nobs, nfeatures): (usize, usize),
        weights: &[T],
        residual: T,
    ) -> std::io::Result<()> {
        let set = &self.settings;
        let out = &mut self.stream;

        print_banner(out)?;

        writeln!(out, "problem:")?;
        writeln!(out, "  observations = {nobs}, features = {nfeatures}")?;
        writeln!(out)?;

        writeln!(out, "settings:")?;
        writeln!(
            out,
            "  precision = {}, tolerance = {:.1e}, pivot search = {}",
            set.precision,
            set.tolerance,
            _pivot_search_str(set.pivot_search)
        )?;
        writeln!(out)?;

        writeln!(out, "weights:")?;
        for (i, w) in weights.iter().enumerate() {
            match i {
                0 => writeln!(out, "  intercept  = {w}")?,
                _ => writeln!(out, "  feature {:<2} = {w}", i - 1)?,
            }
        }
        writeln!(out)?;
        writeln!(out, "residual norm = {residual:.6e}")?;
        writeln!(out, "-------------------------------------------------------------")?;

        out.flush()
    }
}

fn print_banner(out: &mut PrintTarget) -> std::io::Result<()> {
    writeln!(out, "-------------------------------------------------------------")?;
    writeln!(
        out,
        "        lupmat v{}  -  least squares via LU factorization\n",
        crate::VERSION
    )?;
    writeln!(out, "-------------------------------------------------------------")?;
    Ok(())
}

fn _pivot_search_str(p: PivotSearch) -> &'static str {
    match p {
        PivotSearch::Input => "input",
        PivotSearch::Working => "working",
    }
}
