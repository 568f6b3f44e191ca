use oikos_core::{BatchObservations, OikosError, SeriesId, SeriesRequest};

use crate::Oikos;

impl Oikos {
    /// Fetch several identifiers, isolating per-identifier failures.
    ///
    /// Behavior and trade-offs:
    /// - Each identifier is routed independently with the same fallback
    ///   rules as [`Oikos::series`]; one bad identifier lands in
    ///   `failures` without discarding the data the others returned.
    /// - Sequential by default. With `concurrent_batch(true)` the
    ///   per-identifier requests run concurrently; the outcome is keyed
    ///   by identifier either way, so completion order never affects
    ///   content.
    /// - Duplicate identifiers in the input collapse to a single entry.
    pub async fn series_batch(&self, ids: &[SeriesId], req: &SeriesRequest) -> BatchObservations {
        let mut out = BatchObservations::default();
        if self.cfg.concurrent_batch {
            let tasks = ids.iter().map(|id| async move {
                let res = self.series(id, req).await;
                (id.clone(), res)
            });
            for (id, res) in futures::future::join_all(tasks).await {
                insert(&mut out, id, res);
            }
        } else {
            for id in ids {
                let res = self.series(id, req).await;
                insert(&mut out, id.clone(), res);
            }
        }
        out
    }
}

fn insert(
    out: &mut BatchObservations,
    id: SeriesId,
    res: Result<oikos_core::NormalizedSeries, OikosError>,
) {
    match res {
        Ok(series) => {
            out.series.insert(id, series);
        }
        Err(e) => {
            out.failures.insert(id, e);
        }
    }
}
