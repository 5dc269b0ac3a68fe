//! Catalog compiled into the crate and used until a caller swaps it out.

use crate::catalog::identity::ResourceType;
use crate::catalog::model::{ResourceCatalog, ResourceDefinition};

/// Build the default catalog.
///
/// The AWS entries are listed for reference only and stay unsupported until
/// their integrations exist.
pub fn builtin_catalog() -> ResourceCatalog {
    ResourceCatalog::new(vec![
        ResourceDefinition::new("filecoin-files", "Filecoin file storage", ResourceType::Storage)
            .requires(["filecoinPrivkey"]),
        ResourceDefinition::new("aws-s3", "AWS S3", ResourceType::Storage)
            .requires(["awsAccessKeyId", "awsSecretAccessKey", "awsRegion"])
            .unsupported(),
        ResourceDefinition::new("he-dns", "Hurricane Electric DNS", ResourceType::Dns)
            .requires(["heheUser", "hehePassword"]),
        ResourceDefinition::new("aws-route53", "AWS Route 53", ResourceType::Dns)
            .requires(["awsAccessKeyId", "awsSecretAccessKey"])
            .unsupported(),
        ResourceDefinition::new("real-cdn", "Real CDN", ResourceType::Cdn)
            .requires(["rcdnKey", "rcdnSecret"])
            .depends_on(["he-dns"]),
        ResourceDefinition::new("aws-cloudfront", "AWS CloudFront", ResourceType::Cdn)
            .requires(["awsAccessKeyId", "awsSecretAccessKey"])
            .depends_on(["aws-s3", "aws-route53"])
            .unsupported(),
        ResourceDefinition::new("smtp-email", "SMTP e-mail", ResourceType::Email)
            .requires(["smtpHost", "smtpUser", "smtpPassword"]),
        ResourceDefinition::new("aws-ses", "AWS SES", ResourceType::Email)
            .requires(["awsAccessKeyId", "awsSecretAccessKey", "awsRegion"])
            .unsupported(),
    ])
}
