use tracing::debug;

use crate::flowline::Flowline;

/// Number of trailing reaches eligible for correction.
const STUB_LEN: usize = 3;

/// Undo inland relabeling of short stubs at the mouth of the route.
///
/// Near-zero-length closing reaches often start inside the stopping feature
/// and pick up its name. If the final reach is inland-renamed and disagrees
/// with the reach just before the last three, every inland-renamed reach among
/// the last three carrying the final reach's name takes that reach's labels.
/// Routes shorter than four reaches are returned unchanged.
pub(crate) fn correct_trailing_stub(mut flowlines: Vec<Flowline>) -> Vec<Flowline> {
    let len = flowlines.len();
    if len <= STUB_LEN { return flowlines }

    let anchor = &flowlines[len - STUB_LEN - 1];
    let last = &flowlines[len - 1];
    if !last.renamed_inland || last.feature_name == anchor.feature_name { return flowlines }

    let stub_name = last.feature_name.clone();
    let (name, id, inland) = (anchor.feature_name.clone(), anchor.feature_id.clone(), anchor.renamed_inland);
    for flowline in flowlines[len - STUB_LEN..].iter_mut().filter(|f| f.renamed_inland && f.feature_name == stub_name) {
        debug!(comid = flowline.comid, from = %stub_name, to = %name, "corrected trailing stub");
        flowline.relabel(name.clone(), id.clone(), inland);
    }

    flowlines
}
