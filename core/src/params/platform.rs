/// Chip identifiers passed to `ar1.SelectChipVersion`, and the platform family
/// name the mmWave SDK `.cfg` tooling uses for them.
const CHIP_PLATFORMS: &[(&str, &str)] = &[("XWR1843", "xWR18xx")];

pub fn platform_for_chip(chip: &str) -> Option<&'static str> {
    CHIP_PLATFORMS
        .iter()
        .find(|(id, _)| *id == chip)
        .map(|(_, platform)| *platform)
}
