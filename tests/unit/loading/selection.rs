//! Tests for the capped selection: truncation, deletion and remaining slots

#[cfg(test)]
mod tests {
    use crate::png_bytes;
    use gridcollage::CollageError;
    use gridcollage::io::configuration::MAX_IMAGES;
    use gridcollage::loading::{ImageSource, Selection};
    use std::path::PathBuf;

    fn named_sources(count: usize) -> Vec<ImageSource> {
        (0..count)
            .map(|i| ImageSource::new(100 + i, format!("{i}.png"), vec![i as u8]))
            .collect()
    }

    fn names(selection: &Selection) -> Vec<String> {
        selection
            .sources()
            .iter()
            .map(|s| s.id().name.clone())
            .collect()
    }

    // Tests selections keep the first sixteen sources and drop the rest
    // Verified by keeping the last sixteen instead
    #[test]
    fn test_from_sources_keeps_first_sixteen() {
        let selection = Selection::from_sources(named_sources(20));

        assert_eq!(selection.len(), MAX_IMAGES);
        assert_eq!(names(&selection).first().map(String::as_str), Some("0.png"));
        assert_eq!(names(&selection).last().map(String::as_str), Some("15.png"));
        assert_eq!(selection.remaining(), 0);
    }

    // Tests indices are renumbered to match positions
    // Verified by keeping the caller-supplied indices
    #[test]
    fn test_from_sources_renumbers_indices() {
        let selection = Selection::from_sources(named_sources(3));

        let indices: Vec<usize> = selection.sources().iter().map(|s| s.id().index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(selection.remaining(), MAX_IMAGES - 3);
    }

    // Tests removing a source shifts later sources down and renumbers them
    // Verified by skipping the renumbering loop
    #[test]
    fn test_remove_shifts_and_renumbers() {
        let mut selection = Selection::from_sources(named_sources(4));

        let removed = selection.remove(1).unwrap();

        assert_eq!(removed.id().name, "1.png");
        assert_eq!(names(&selection), vec!["0.png", "2.png", "3.png"]);
        let indices: Vec<usize> = selection.sources().iter().map(|s| s.id().index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    // Tests removing past the end leaves the selection unchanged
    // Verified by panicking on out-of-range removal
    #[test]
    fn test_remove_out_of_range() {
        let mut selection = Selection::from_sources(named_sources(2));

        assert!(selection.remove(2).is_none());
        assert_eq!(selection.len(), 2);
    }

    // Tests an empty selection reports all slots free
    // Verified by returning zero remaining for empty selections
    #[test]
    fn test_empty_selection() {
        let selection = Selection::new();

        assert!(selection.is_empty());
        assert_eq!(selection.remaining(), MAX_IMAGES);
        assert!(selection.into_sources().is_empty());
    }

    // Tests paths past the cap are never read
    // Verified by reading every path before truncating
    #[test]
    fn test_from_paths_ignores_paths_past_cap() {
        let dir = tempfile::tempdir().unwrap();
        let mut paths: Vec<PathBuf> = (0..MAX_IMAGES)
            .map(|i| {
                let path = dir.path().join(format!("{i:02}.png"));
                std::fs::write(&path, png_bytes(1, 1, [0, 0, 0, 255])).unwrap();
                path
            })
            .collect();
        paths.push(dir.path().join("never-written-a.png"));
        paths.push(dir.path().join("never-written-b.png"));

        let selection = Selection::from_paths(&paths).unwrap();

        assert_eq!(selection.len(), MAX_IMAGES);
        assert_eq!(selection.sources()[15].id().name, "15.png");
        assert_eq!(selection.sources()[15].id().index, 15);
    }

    // Tests a missing file within the cap fails the whole selection
    // Verified by skipping unreadable files
    #[test]
    fn test_from_paths_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let paths = vec![dir.path().join("absent.png")];

        let result = Selection::from_paths(&paths);

        assert!(matches!(result, Err(CollageError::FileSystem { .. })));
    }
}
