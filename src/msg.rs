use crossbeam_channel::{Receiver, Sender};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::SystemTime;

use dash_ability::NetworkSink;

/// 送往伺服器的封包
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ClientMsg {
    pub channel: String,
    pub payload: Vec<u8>,
    pub time: SystemTime,
}

impl ClientMsg {
    pub fn new(channel: &str, payload: &[u8]) -> ClientMsg {
        ClientMsg {
            channel: channel.to_owned(),
            payload: payload.to_vec(),
            time: SystemTime::now(),
        }
    }

    /// 紀錄用的 JSON 字串
    pub fn to_json(&self) -> String {
        json!({
            "channel": self.channel,
            "payload": self.payload,
        })
        .to_string()
    }
}

/// 把封包丟進傳送佇列，不等待回應
#[derive(Clone, Debug)]
pub struct ChannelNetworkSink {
    tx: Sender<ClientMsg>,
}

impl ChannelNetworkSink {
    pub fn new(tx: Sender<ClientMsg>) -> Self {
        Self { tx }
    }

    /// 建立傳送佇列，回傳寫入端與網路層用的讀取端
    pub fn channel() -> (Self, Receiver<ClientMsg>) {
        let (tx, rx) = crossbeam_channel::unbounded();
        (Self::new(tx), rx)
    }
}

impl NetworkSink for ChannelNetworkSink {
    fn send_to_server(&mut self, channel: &str, payload: &[u8]) {
        if let Err(e) = self.tx.send(ClientMsg::new(channel, payload)) {
            log::warn!("封包送出失敗 {}: {}", channel, e);
        }
    }
}
