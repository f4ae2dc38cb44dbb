use std::io::Cursor;

use anyhow::Context;
use async_trait::async_trait;
use image::{ImageFormat, Luma};
use qrcode::QrCode;

use super::ArtifactProvider;

pub struct QrCodeProvider;

#[async_trait]
impl ArtifactProvider for QrCodeProvider {
    async fn generate(&self, employee_id: &str) -> anyhow::Result<Vec<u8>> {
        let text = employee_id.to_string();
        let png = tokio::task::spawn_blocking(move || -> anyhow::Result<Vec<u8>> {
            let code = QrCode::new(text.as_bytes()).context("failed to build QR code")?;
            let img = code.render::<Luma<u8>>().min_dimensions(256, 256).build();
            let mut png = Vec::new();
            img.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
                .context("failed to encode QR image as PNG")?;
            Ok(png)
        })
        .await
        .context("QR render task panicked")??;

        Ok(png)
    }
}
