use yt_shorts_service::download_video::last_stderr_line;
use yt_shorts_service::trim_video::parse_ffprobe_duration;

// ===== ffprobe output parsing =====

#[test]
fn test_parse_plain_duration() {
    assert_eq!(parse_ffprobe_duration("59.940000\n"), Some(59.94));
    assert_eq!(parse_ffprobe_duration("600.0"), Some(600.0));
    assert_eq!(parse_ffprobe_duration("  12.5  "), Some(12.5));
}

#[test]
fn test_parse_rejects_garbage() {
    assert_eq!(parse_ffprobe_duration(""), None);
    assert_eq!(parse_ffprobe_duration("N/A"), None);
    assert_eq!(parse_ffprobe_duration("duration=59.94"), None);
    assert_eq!(parse_ffprobe_duration("inf"), None);
}

// ===== yt-dlp diagnostics =====

#[test]
fn test_last_stderr_line_picks_the_error() {
    let stderr = "[youtube] Extracting URL\nWARNING: something minor\nERROR: Unsupported URL: foo\n";
    assert_eq!(last_stderr_line(stderr), "ERROR: Unsupported URL: foo");
}

#[test]
fn test_last_stderr_line_skips_trailing_blanks() {
    let stderr = "ERROR: Video unavailable\n\n  \n";
    assert_eq!(last_stderr_line(stderr), "ERROR: Video unavailable");
}

#[test]
fn test_last_stderr_line_on_empty_output() {
    assert_eq!(last_stderr_line(""), "yt-dlp failed without diagnostics");
}
