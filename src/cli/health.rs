use log::info;

use crate::{
    cli::Args, client::ClusterClient, cloud_id, config::Credentials, errors::Result, report,
};

pub fn run(args: Args) -> Result<()> {
    let credentials = Credentials::resolve(args.cloud_id, args.api_key)?;
    let endpoint = cloud_id::endpoint(&credentials.cloud_id)?;
    info!("Resolved cluster endpoint: {endpoint}");

    let client = ClusterClient::new(endpoint, credentials.api_key).with_timeout(args.timeout);
    let doc = client.cluster_health()?;
    // 文档解码完成后的渲染不会失败
    report::display(&doc, doc.status())
}
