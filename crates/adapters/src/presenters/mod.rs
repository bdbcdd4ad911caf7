use poke_wall_domain::{PipelineOutcome, SpeciesName};

pub fn present_outcome(outcome: &PipelineOutcome) -> String {
    match outcome {
        PipelineOutcome::WallpaperSet(path) => {
            format!("desktop background set to {}", path.display())
        }
        PipelineOutcome::DownloadFailed => "image download failed".to_string(),
        PipelineOutcome::ResizeFailed => "image could not be resized".to_string(),
        PipelineOutcome::SaveFailed => "image file could not be saved".to_string(),
        PipelineOutcome::WallpaperFailed(path) => format!(
            "image saved to {} but the desktop background was not changed",
            path.display()
        ),
    }
}

/// Human label for a catalog name: `mr-mime` becomes `Mr-Mime`.
pub fn present_species_label(name: &SpeciesName) -> String {
    let mut label = String::with_capacity(name.as_str().len());
    let mut capitalize = true;
    for ch in name.as_str().chars() {
        if capitalize {
            label.extend(ch.to_uppercase());
        } else {
            label.push(ch);
        }
        capitalize = ch == '-' || ch == ' ';
    }
    label
}
