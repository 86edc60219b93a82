use crate::assets::{resolve_assets, resolve_output_path};
use crate::options::ZineOptions;
use crate::types::*;

/// Validate the options and describe the layout without decoding any image
pub fn calculate_layout(options: &ZineOptions) -> Result<LayoutSummary> {
    let geometry = options.validate()?;
    let assets = resolve_assets(options)?;

    let cells = geometry
        .placements()
        .into_iter()
        .map(|placement| {
            let path = assets.path(placement.slot())?.to_owned();
            Ok((placement, path))
        })
        .collect::<Result<Vec<_>>>()?;

    let has_cover = options
        .full_back_cover
        .as_deref()
        .is_some_and(|cover| cover.is_file());
    let expected_pages = match options.output_kind {
        OutputKind::Pdf if has_cover => 2,
        _ => 1,
    };

    Ok(LayoutSummary {
        geometry,
        cells,
        output_kind: options.output_kind,
        output_path: resolve_output_path(options),
        expected_pages,
    })
}
