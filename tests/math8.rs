mod tests {
    use myrtio_pixel_effects::math8::{sin8, triwave8};

    #[test]
    fn test_sin8() {
        assert_eq!(sin8(0), 128);
        assert_eq!(sin8(32), 218);
        assert_eq!(sin8(63), 254);
        assert_eq!(sin8(64), 255);
        assert_eq!(sin8(127), 131);
        assert_eq!(sin8(128), 128);
        assert_eq!(sin8(191), 2);
        assert_eq!(sin8(192), 1);
    }

    #[test]
    fn test_triwave8() {
        assert_eq!(triwave8(0), 0);
        assert_eq!(triwave8(64), 128);
        assert_eq!(triwave8(127), 254);
        assert_eq!(triwave8(128), 254);
        assert_eq!(triwave8(255), 0);
    }
}
