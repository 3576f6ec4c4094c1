//! Data-parallel mapping over the planes of a [`PlanarImage`].
//!
//! Every kernel in this crate is pointwise: an output sample depends only on
//! the input sample(s) at the same index. The planes are therefore split into
//! [`CHUNK_SIZE`] sample chunks which are processed independently. With the
//! `multithreaded` feature the chunks are handed to rayon; otherwise the same
//! loop runs on the calling thread.
//!
//! Callers must ensure `input` and `output` have identical dimensions.

use crate::KernelError;
use planar_adjust_common::channel::CHANNEL_COUNT;
use planar_adjust_common::PlanarImage;

#[cfg(feature = "multithreaded")]
use rayon::prelude::*;

/// Number of samples processed per unit of work.
pub const CHUNK_SIZE: usize = 64 * 1024;

/// Returns an error unless `output` can hold the result of transforming `input`.
pub(crate) fn check_output(input: &PlanarImage, output: &PlanarImage) -> Result<(), KernelError> {
    if input.same_dimensions(output) {
        return Ok(());
    }

    Err(KernelError::DimensionMismatch {
        input_width: input.width(),
        input_height: input.height(),
        output_width: output.width(),
        output_height: output.height(),
    })
}

/// Applies `op` to every sample of every plane independently.
pub fn map_samples<F>(input: &PlanarImage, output: &mut PlanarImage, op: F)
where
    F: Fn(u8) -> u8 + Sync + Send,
{
    debug_assert!(input.same_dimensions(output));
    for (src, dst) in input.planes().into_iter().zip(output.planes_mut()) {
        map_plane(src, dst, &op);
    }
}

/// Applies `op` to every `[r, g, b]` pixel.
pub fn map_pixels<F>(input: &PlanarImage, output: &mut PlanarImage, op: F)
where
    F: Fn([u8; CHANNEL_COUNT]) -> [u8; CHANNEL_COUNT] + Sync + Send,
{
    debug_assert!(input.same_dimensions(output));
    let src = input.planes();
    let [dst_r, dst_g, dst_b] = output.planes_mut();

    #[cfg(feature = "multithreaded")]
    let chunks = dst_r
        .par_chunks_mut(CHUNK_SIZE)
        .zip(dst_g.par_chunks_mut(CHUNK_SIZE))
        .zip(dst_b.par_chunks_mut(CHUNK_SIZE));

    #[cfg(not(feature = "multithreaded"))]
    let chunks = dst_r
        .chunks_mut(CHUNK_SIZE)
        .zip(dst_g.chunks_mut(CHUNK_SIZE))
        .zip(dst_b.chunks_mut(CHUNK_SIZE));

    chunks.enumerate().for_each(|(chunk_idx, ((r, g), b))| {
        let start = chunk_idx * CHUNK_SIZE;
        let end = start + r.len();
        map_pixel_chunk(
            [&src[0][start..end], &src[1][start..end], &src[2][start..end]],
            [r, g, b],
            &op,
        );
    });
}

#[cfg(feature = "multithreaded")]
fn map_plane<F>(src: &[u8], dst: &mut [u8], op: &F)
where
    F: Fn(u8) -> u8 + Sync + Send,
{
    dst.par_chunks_mut(CHUNK_SIZE)
        .zip(src.par_chunks(CHUNK_SIZE))
        .for_each(|(dst, src)| map_sample_chunk(src, dst, op));
}

#[cfg(not(feature = "multithreaded"))]
fn map_plane<F>(src: &[u8], dst: &mut [u8], op: &F)
where
    F: Fn(u8) -> u8 + Sync + Send,
{
    dst.chunks_mut(CHUNK_SIZE)
        .zip(src.chunks(CHUNK_SIZE))
        .for_each(|(dst, src)| map_sample_chunk(src, dst, op));
}

#[inline(always)]
fn map_sample_chunk<F>(src: &[u8], dst: &mut [u8], op: &F)
where
    F: Fn(u8) -> u8,
{
    for (out, &sample) in dst.iter_mut().zip(src) {
        *out = op(sample);
    }
}

#[inline(always)]
fn map_pixel_chunk<F>(src: [&[u8]; CHANNEL_COUNT], dst: [&mut [u8]; CHANNEL_COUNT], op: &F)
where
    F: Fn([u8; CHANNEL_COUNT]) -> [u8; CHANNEL_COUNT],
{
    let [src_r, src_g, src_b] = src;
    let [dst_r, dst_g, dst_b] = dst;
    for idx in 0..dst_r.len() {
        let [r, g, b] = op([src_r[idx], src_g[idx], src_b[idx]]);
        dst_r[idx] = r;
        dst_g[idx] = g;
        dst_b[idx] = b;
    }
}
