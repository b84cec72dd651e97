use bitveil::capacity::required_bits;
use bitveil::{PixelGrid, StegoError, validate};

/// 验证容量充足与不足的典型情况
#[test]
fn test_validate_scenarios() {
    assert!(validate(10, 10, "Hi").unwrap());
    assert!(!validate(4, 2, "Hi").unwrap());
    assert!(validate(1, 1, "").unwrap());
    assert!(!validate(1, 1, "a").unwrap());
}

/// 验证恰好相等时判定为可容纳
#[test]
fn test_validate_boundary() {
    // "Hi" 需要 16 比特
    assert!(validate(4, 4, "Hi").unwrap());
    assert!(validate(16, 1, "Hi").unwrap());
    assert!(!validate(5, 3, "Hi").unwrap());
}

/// 验证对固定文本，结果随像素数单调不减
#[test]
fn test_validate_monotonic_in_pixel_count() {
    let text = "monotonic";
    let mut seen_fit = false;
    for pixels in 1..=200u32 {
        let fits = validate(pixels, 1, text).unwrap();
        if seen_fit {
            assert!(fits, "capacity regressed at {pixels} pixels");
        }
        seen_fit |= fits;
        assert_eq!(fits, u64::from(pixels) >= 72);
    }
}

/// 验证尺寸为零时直接报错，而不是报告容量不足
#[test]
fn test_validate_rejects_degenerate_geometry() {
    assert_eq!(
        validate(0, 10, "Hi").unwrap_err(),
        StegoError::InvalidGeometry {
            width: 0,
            height: 10
        }
    );
    assert!(matches!(
        validate(10, 0, "").unwrap_err(),
        StegoError::InvalidGeometry { .. }
    ));
}

/// 验证字符数而不是 UTF-8 字节数决定所需比特
#[test]
fn test_required_bits_counts_characters() {
    assert_eq!(required_bits(""), 0);
    assert_eq!(required_bits("Hi"), 16);
    assert_eq!(required_bits("éé"), 16);
}

/// 验证 PixelGrid 的容量计算与报告
#[test]
fn test_pixel_grid_report() {
    let grid = PixelGrid::new(4, 2).unwrap();
    assert_eq!(grid.available_bits(), 8);
    assert_eq!(grid.max_chars(), 1);

    let report = grid.report("Hi");
    assert_eq!(report.required_bits, 16);
    assert_eq!(report.available_bits, 8);
    assert!(!report.fits);

    assert!(grid.fits("H"));
    assert!(grid.ensure_fits("H").is_ok());
    assert_eq!(
        grid.ensure_fits("Hi").unwrap_err(),
        StegoError::InsufficientCapacity {
            required_bits: 16,
            available_bits: 8
        }
    );
}

/// 验证大尺寸图像的容量不会溢出
#[test]
fn test_large_grid_does_not_overflow() {
    let grid = PixelGrid::new(u32::MAX, u32::MAX).unwrap();
    assert_eq!(grid.available_bits(), u64::from(u32::MAX) * u64::from(u32::MAX));
}
