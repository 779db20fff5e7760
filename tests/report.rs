#[cfg(test)]
mod tests {
    use dailytally::libs::parser::parse;
    use dailytally::libs::report::{render, ReportWriter};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ReportTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ReportTestContext {
        fn setup() -> Self {
            ReportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    const LOG: &str = "2024-05-01\n・【保守】(1h)\n・【謎】(2h)\n2024-05-02\n・【基盤改善】(0.5h)\n";

    #[test_context(ReportTestContext)]
    #[test]
    fn test_write_and_read_back(ctx: &mut ReportTestContext) {
        let result = parse(LOG);
        let writer = ReportWriter::new(ctx.temp_dir.path().join("processed_output.txt"));

        let content = writer.write_and_read_back(&result).unwrap();
        assert_eq!(content, render(&result));
        assert_eq!(std::fs::read_to_string(writer.path()).unwrap(), content);
        assert!(content.contains("2024-05-01 : ・【謎】(2h)"));
    }

    #[test_context(ReportTestContext)]
    #[test]
    fn test_write_replaces_previous_report(ctx: &mut ReportTestContext) {
        let path = ctx.temp_dir.path().join("report.txt");
        std::fs::write(&path, "stale").unwrap();

        let writer = ReportWriter::new(&path);
        assert_eq!(writer.write(&parse(LOG)), Some(path.clone()));

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("stale"));
        assert!(content.contains("2024-05-02,00:00,00:00,00:30"));
        // Only the report is left behind.
        assert_eq!(std::fs::read_dir(ctx.temp_dir.path()).unwrap().count(), 1);
    }

    #[test_context(ReportTestContext)]
    #[test]
    fn test_write_creates_missing_directories(ctx: &mut ReportTestContext) {
        let path = ctx.temp_dir.path().join("reports").join("2024-05").join("hours.txt");
        let writer = ReportWriter::new(&path);
        assert!(writer.write(&parse(LOG)).is_some());
        assert!(path.exists());
    }

    #[test_context(ReportTestContext)]
    #[test]
    fn test_unwritable_destination_yields_none(ctx: &mut ReportTestContext) {
        let blocker = ctx.temp_dir.path().join("not_a_dir");
        std::fs::write(&blocker, "file").unwrap();

        let writer = ReportWriter::new(blocker.join("report.txt"));
        assert_eq!(writer.write(&parse(LOG)), None);
        assert_eq!(writer.write_and_read_back(&parse(LOG)), None);
    }

    #[cfg(unix)]
    #[test_context(ReportTestContext)]
    #[test]
    fn test_report_permissions(ctx: &mut ReportTestContext) {
        use std::os::unix::fs::PermissionsExt;

        let fresh = ctx.temp_dir.path().join("fresh.txt");
        assert!(ReportWriter::new(&fresh).write(&parse(LOG)).is_some());
        let mode = std::fs::metadata(&fresh).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);

        let shared = ctx.temp_dir.path().join("shared.txt");
        std::fs::write(&shared, "old").unwrap();
        std::fs::set_permissions(&shared, std::fs::Permissions::from_mode(0o664)).unwrap();
        assert!(ReportWriter::new(&shared).write(&parse(LOG)).is_some());
        let mode = std::fs::metadata(&shared).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o664);
    }

    #[test]
    fn test_render_is_deterministic() {
        let result = parse(LOG);
        assert_eq!(render(&result), render(&result));
    }
}
