//! Canonical values covering the optional fields of every dialect.

use ethrpc_eth::{Block, Condition, Transaction, U256, U64};

const BLOCK_HASH: &str = "0xb3b20624f8f0f86eb50dd04688409e5cea4bd02d700bf6e79e9384d47d6a5a35";

/// A mined value transfer without vendor extensions.
pub fn transaction() -> Transaction {
    Transaction {
        block_hash: Some(BLOCK_HASH.to_owned()),
        block_number: Some(0x1b4),
        from: "0xa7d9ddbe1f17865597fbd27ec712455208b6b76d".to_owned(),
        gas: 0xc350,
        gas_price: U256::from(0x4_a817_c800_u64),
        hash: "0x88df016429689c079f3b2f6ad39fa052532c56795b733da78a91ebe6a713944b".to_owned(),
        input: "0x68656c6c6f21".to_owned(),
        nonce: 0x15,
        to: Some("0xf02c1c8e6114b1dbe8937a39260b5b0a374432bb".to_owned()),
        transaction_index: Some(0x41),
        r: "0x1b5e176d927f8e9ab405058b2d2457392da3e20f328b16ddabcebc33eaac5fea".to_owned(),
        s: "0x4ba69724e8f69de52f0125ad8b3c5c2cef33019bac3249e2c0a2192766d1721c".to_owned(),
        v: 0x25,
        value: U256::from(0xf3db_b760_2e8b_0000_u64),
        ..Transaction::default()
    }
}

/// A transaction that has not been included in a block.
pub fn pending_transaction() -> Transaction {
    Transaction {
        block_hash: None,
        block_number: None,
        transaction_index: None,
        ..transaction()
    }
}

/// A contract creation that reports the created address.
pub fn contract_creation() -> Transaction {
    Transaction {
        hash: "0x2fa4a0ad9ef4c5a6b2a1b8e5f1c3a8a7f3b1d2e9c8a7f6e5d4c3b2a1f0e9d8c7".to_owned(),
        input: "0x6080604052348015600f57600080fd5b50".to_owned(),
        to: None,
        creates: Some("0x5a443704dd4b594b382c22a083e2bd3090a6fef3".to_owned()),
        transaction_index: Some(0x42),
        value: U256::ZERO,
        ..transaction()
    }
}

/// A transaction carrying every Parity extension.
pub fn parity_transaction() -> Transaction {
    Transaction {
        network_id: Some(1),
        chain_id: Some(1),
        public_key: Some(
            "0x04a6c28a8b93cd4e3b0b4c2a5d2d0e0bb71b2f5d1d6d4e0b3b7e5f3a9f2c1e0d\
             8b7a6f5e4d3c2b1a09f8e7d6c5b4a39281706f5e4d3c2b1a0f9e8d7c6b5a4938"
                .to_owned(),
        ),
        raw: Some("0xf86b158504a817c80082c35094f02c1c8e6114b1dbe8937a39260b5b0a374432bb".to_owned()),
        standard_v: Some(0),
        condition: Some(Condition::Time(1_491_290_692)),
        ..transaction()
    }
}

/// A sealed block without vendor extensions.
pub fn block() -> Block {
    Block {
        author: None,
        difficulty: U256::from(0x4_ea3f_27bc_u64),
        extra_data: "0x476574682f4c5649562f76312e302e302f6c696e75782f676f312e342e32".to_owned(),
        gas_limit: 0x1388,
        gas_used: 0,
        hash: BLOCK_HASH.to_owned(),
        logs_bloom: format!("0x{}", "0".repeat(512)),
        miner: "0x05a56e2d52c817161883f50c441c3228cfe54d9f".to_owned(),
        mix_hash: "0x969b900de27b6ac6a67742365dd65f55a0526c41fd18e1b16f1a1215c2e66f59".to_owned(),
        nonce: Some(U64::from(0x539_u64)),
        number: 0x1b4,
        parent_hash: "0x88e96d4537bea4d9c05d12549907b32561d3bf31f45aae734cdc119f13406cb6"
            .to_owned(),
        receipts_root: "0x56e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421"
            .to_owned(),
        seal_fields: None,
        sha3_uncles: "0x1dcc4de8dec75d7aab85b567b6ccd41ad312451b948a7413f0a142fd40d49347"
            .to_owned(),
        size: 0x21b,
        state_root: "0xd67e4d450343046425ae4271474353857ab860dbc0a1dde64b41b5cd3a532bf3"
            .to_owned(),
        timestamp: 0x55ba_4224,
        total_difficulty: Some(U256::from(0x7ff8_0000_0000_u64)),
        transactions: vec![transaction(), contract_creation()],
        transactions_root: "0x56e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421"
            .to_owned(),
        uncles: Vec::new(),
    }
}

/// A block carrying the Parity `author` and `sealFields` extensions.
pub fn parity_block() -> Block {
    let block = block();

    Block {
        author: Some(block.miner.clone()),
        seal_fields: Some(vec![
            format!("0xa0{}", &block.mix_hash[2..]),
            "0x880000000000000539".to_owned(),
        ]),
        transactions: vec![
            parity_transaction(),
            Transaction {
                condition: Some(Condition::Block(0x1b0)),
                ..parity_transaction()
            },
            Transaction {
                condition: None,
                network_id: None,
                ..parity_transaction()
            },
        ],
        uncles: vec![
            "0x1a2b3c4d5e6f708192a3b4c5d6e7f8091a2b3c4d5e6f708192a3b4c5d6e7f809".to_owned(),
        ],
        ..block
    }
}
