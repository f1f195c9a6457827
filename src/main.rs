use anyhow::Result;
use galaxy::color::Color;
use galaxy::config::GalaxyConfig;
use galaxy::framebuffer::Framebuffer;
use galaxy::rng::EntropySource;
use galaxy::sim::Galaxy;
use image::{ImageBuffer, Rgb};
use log::info;
use minifb::{Key, KeyRepeat, Window, WindowOptions};

fn main() -> Result<()> {
    env_logger::init();

    let (w, h) = (600usize, 600usize);
    let mut window = Window::new("Galaxy", w, h, WindowOptions { resize: true, ..WindowOptions::default() })?;
    window.set_target_fps(60);

    // optional seed argument makes a run reproducible
    let seed = std::env::args().nth(1).and_then(|a| a.parse().ok()).unwrap_or_else(|| fastrand::u64(..));
    info!("rng seed {seed}");
    let mut rng = EntropySource::with_seed(seed);

    let cfg = GalaxyConfig::default();
    let mut galaxy = Galaxy::new(&cfg, &mut rng);
    info!("{} stars, {} grid segments", galaxy.star_count(), galaxy.grid_segment_count());

    let mut fb = Framebuffer::new(w, h);

    while window.is_open() && !window.is_key_down(Key::Escape) {
        if window.is_key_pressed(Key::Equal, KeyRepeat::Yes) || window.is_key_pressed(Key::NumPadPlus, KeyRepeat::Yes) {
            galaxy.speed_up();
        }
        if window.is_key_pressed(Key::Minus, KeyRepeat::Yes) || window.is_key_pressed(Key::NumPadMinus, KeyRepeat::Yes) {
            galaxy.slow_down();
        }

        // the surface may have been resized since the last frame
        let (cw, ch) = window.get_size();
        if cw == 0 || ch == 0 {
            window.update();
            continue;
        }
        if (cw, ch) != (fb.width, fb.height) {
            fb.resize(cw, ch);
        }

        fb.clear(Color::rgb(0, 0, 0));
        galaxy.advance(&mut rng);
        galaxy.draw(&mut fb);
        window.update_with_buffer(&fb.buffer, fb.width, fb.height)?;

        if window.is_key_pressed(Key::S, KeyRepeat::No) {
            save_screenshot(&fb)?;
        }
    }
    Ok(())
}

fn save_screenshot(fb: &Framebuffer) -> Result<()> {
    let mut img = ImageBuffer::<Rgb<u8>, Vec<u8>>::new(fb.width as u32, fb.height as u32);
    for y in 0..fb.height {
        for x in 0..fb.width {
            let px = fb.buffer[y * fb.width + x];
            img.put_pixel(x as u32, y as u32, Rgb([((px >> 16) & 0xFF) as u8, ((px >> 8) & 0xFF) as u8, (px & 0xFF) as u8]));
        }
    }
    img.save("screenshot.png")?;
    info!("saved screenshot.png");
    Ok(())
}
