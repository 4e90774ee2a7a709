//! Demosaicing benchmarks.

#![cfg_attr(feature = "bench", feature(test))]

#[cfg(all(feature = "bench", test))]
extern crate test;

#[cfg(all(feature = "bench", test))]
mod bench {
    use malvar::{
        mono16, mono16_to8, mono8, rgb16, rgb16_to8, rgb8, row_rgb16, DemosaicParams, LumaCoefs,
    };

    const IMG_W: usize = 128;
    const IMG_H: usize = 128;

    fn params16() -> DemosaicParams {
        DemosaicParams::new(IMG_H, IMG_W, 0x0FFF)
            .with_rshift(4)
            .with_luma(LumaCoefs::REC601)
    }

    fn params8() -> DemosaicParams {
        DemosaicParams::new(IMG_H, IMG_W, 0xFF).with_luma(LumaCoefs::REC601)
    }

    #[bench]
    fn bench_rgb16(b: &mut test::Bencher) {
        let bayer = vec![0u16; IMG_W * IMG_H];
        let params = params16();
        let mut out = vec![0u16; 3 * IMG_W * IMG_H];
        b.iter(|| rgb16(&bayer, &params, &mut out));
    }

    #[bench]
    fn bench_rgb8(b: &mut test::Bencher) {
        let bayer = vec![0u8; IMG_W * IMG_H];
        let params = params8();
        let mut out = vec![0u8; 3 * IMG_W * IMG_H];
        b.iter(|| rgb8(&bayer, &params, &mut out));
    }

    #[bench]
    fn bench_rgb16_to8(b: &mut test::Bencher) {
        let bayer = vec![0u16; IMG_W * IMG_H];
        let params = params16();
        let mut out = vec![0u8; 3 * IMG_W * IMG_H];
        b.iter(|| rgb16_to8(&bayer, &params, &mut out));
    }

    #[bench]
    fn bench_mono16(b: &mut test::Bencher) {
        let bayer = vec![0u16; IMG_W * IMG_H];
        let params = params16();
        let mut out = vec![0u16; IMG_W * IMG_H];
        b.iter(|| mono16(&bayer, &params, &mut out));
    }

    #[bench]
    fn bench_mono8(b: &mut test::Bencher) {
        let bayer = vec![0u8; IMG_W * IMG_H];
        let params = params8();
        let mut out = vec![0u8; IMG_W * IMG_H];
        b.iter(|| mono8(&bayer, &params, &mut out));
    }

    #[bench]
    fn bench_mono16_to8(b: &mut test::Bencher) {
        let bayer = vec![0u16; IMG_W * IMG_H];
        let params = params16();
        let mut out = vec![0u8; IMG_W * IMG_H];
        b.iter(|| mono16_to8(&bayer, &params, &mut out));
    }

    #[bench]
    fn bench_row_rgb16_interior(b: &mut test::Bencher) {
        let bayer = vec![0u16; IMG_W * IMG_H];
        let params = params16();
        let mut out = vec![0u16; 3 * IMG_W];
        b.iter(|| row_rgb16(&bayer, &params, IMG_H / 2, &mut out));
    }
}
