//! Items a brand-new tracker starts with.

pub const SEED_ITEMS: &[&str] = &[
    "[工作] 回复重要邮件",
    "[工作] 整理工作文档",
    "[工作] 制定下周计划",
    "[工作] 跟进客户需求",
    "[学习] 阅读技术书籍",
    "[学习] 观看在线课程",
    "[学习] 练习编程题目",
    "[学习] 学习新技能",
    "[学习] 复习笔记",
    "[学习] 写学习总结",
    "[学习] 参加技术交流",
    "[生活] 打扫房间",
    "[生活] 购买生活用品",
    "[生活] 准备晚餐",
    "[生活] 整理衣柜",
    "[生活] 缴纳水电费",
    "[生活] 预约医生",
    "[生活] 联系朋友",
    "[生活] 规划周末活动",
    "[健康] 晨跑30分钟",
    "[健康] 做瑜伽",
    "[健康] 喝够8杯水",
    "[健康] 早睡早起",
    "[健康] 吃健康早餐",
    "[健康] 体检预约",
    "[娱乐] 看电影",
    "[娱乐] 听音乐",
    "[娱乐] 玩游戏放松",
    "[娱乐] 看综艺节目",
    "[娱乐] 阅读小说",
    "[娱乐] 户外散步",
    "[娱乐] 尝试新菜谱",
    // Uncategorized
    "打电话给家人",
    "整理照片",
    "备份重要文件",
    "修理损坏物品",
    "写日记",
    "计划旅行",
    "学习摄影",
    "整理收藏",
    "写感谢信",
    "学习新语言",
];
